/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//!
//! `firmware-repository-profile` subcommand dispatcher + backing functions.
//!

use http::{HeaderName, HeaderValue};
use model::ModuleResult;
use omevv::endpoints::VCENTER_ID_HEADER;
use omevv::{
    CreateFirmwareRepositoryProfile, DeleteFirmwareRepositoryProfile,
    ModifyFirmwareRepositoryProfile,
};
use openmanage_rest::{EndpointConfig, HttpRestClient};

use crate::args::Cli;
use crate::config::{FileConfig, resolve_endpoint, resolve_vcenter_uuid};
use crate::errors::{OmctlError, OmctlResult};
use crate::firmware_profile::args::CmdProfile;
use crate::output::finish;

/// dispatch matches + dispatches the correct command for the
/// `firmware-repository-profile` subcommand.
pub async fn dispatch(
    cmd: &CmdProfile,
    cli: &Cli,
    file_config: Option<&FileConfig>,
) -> OmctlResult<ModuleResult> {
    let config = resolve_endpoint(&cli.endpoint, file_config)?;

    let outcome = match cmd {
        CmdProfile::Create(local_args) => {
            let client = omevv_client(
                &config,
                &resolve_vcenter_uuid(local_args.vcenter_uuid.as_deref(), file_config)?,
            )?;
            CreateFirmwareRepositoryProfile::new(&client, local_args.settings(), cli.check)
                .execute()
                .await
        }
        CmdProfile::Modify(local_args) => {
            let client = omevv_client(
                &config,
                &resolve_vcenter_uuid(local_args.vcenter_uuid.as_deref(), file_config)?,
            )?;
            ModifyFirmwareRepositoryProfile::new(&client, local_args.settings(), cli.check)
                .execute()
                .await
        }
        CmdProfile::Delete(local_args) => {
            let client = omevv_client(
                &config,
                &resolve_vcenter_uuid(local_args.vcenter_uuid.as_deref(), file_config)?,
            )?;
            DeleteFirmwareRepositoryProfile::new(&client, local_args.name.clone(), cli.check)
                .execute()
                .await
        }
    };

    Ok(finish(outcome))
}

/// An endpoint client with the vCenter identifier header attached, as the
/// OMEVV gateway requires on every call.
fn omevv_client(config: &EndpointConfig, vcenter_uuid: &str) -> OmctlResult<HttpRestClient> {
    let value = HeaderValue::from_str(vcenter_uuid).map_err(|_| {
        OmctlError::GenericError(format!("invalid vCenter UUID: {vcenter_uuid}"))
    })?;
    Ok(HttpRestClient::new(config)?
        .with_header(HeaderName::from_static(VCENTER_ID_HEADER), value))
}
