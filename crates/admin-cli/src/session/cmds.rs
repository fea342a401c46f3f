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
//! `session` subcommand dispatcher + backing functions.
//!

use idrac::{CreateSession, DeleteSession};
use model::ModuleResult;
use openmanage_rest::HttpRestClient;

use crate::args::Cli;
use crate::config::{FileConfig, resolve_endpoint};
use crate::errors::OmctlResult;
use crate::output::finish;
use crate::session::args::CmdSession;

/// dispatch matches + dispatches the correct command for the `session`
/// subcommand.
pub async fn dispatch(
    cmd: &CmdSession,
    cli: &Cli,
    file_config: Option<&FileConfig>,
) -> OmctlResult<ModuleResult> {
    let config = resolve_endpoint(&cli.endpoint, file_config)?;
    let client = HttpRestClient::new(&config)?;

    let outcome = match cmd {
        CmdSession::Create(_) => {
            CreateSession::new(&client, config.username.as_str(), config.password.as_str())
                .execute()
                .await
        }
        CmdSession::Delete(local_args) => {
            DeleteSession::new(&client, local_args.session_id.clone(), cli.check)
                .execute()
                .await
        }
    };

    Ok(finish(outcome))
}
