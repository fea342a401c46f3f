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

use clap::Subcommand;
use model::ProtocolType;
use omevv::ProfileSettings;

#[derive(Debug, Subcommand)]
pub enum CmdProfile {
    /// Create the profile, or converge an existing one with the same name.
    Create(ProfileArgs),
    /// Modify an existing profile; fails when the name does not exist.
    Modify(ProfileArgs),
    /// Delete a profile by name. A name that is already gone is a no-op.
    Delete(Delete),
}

#[derive(Debug, clap::Args)]
pub struct ProfileArgs {
    /// Profile name; the unique lookup key on the appliance.
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: Option<String>,

    /// Share transport: NFS, CIFS, HTTP, or HTTPS.
    #[arg(long)]
    pub protocol_type: ProtocolType,

    /// Full path of the catalog file on the share.
    #[arg(long)]
    pub catalog_path: String,

    #[arg(long)]
    pub share_username: Option<String>,

    #[arg(long, env = "OMCTL_SHARE_PASSWORD", hide_env_values = true)]
    pub share_password: Option<String>,

    #[arg(long)]
    pub share_domain: Option<String>,

    /// UUID of the vCenter instance the OMEVV requests are scoped to.
    #[arg(long, env = "OMCTL_VCENTER_UUID")]
    pub vcenter_uuid: Option<String>,
}

impl ProfileArgs {
    pub fn settings(&self) -> ProfileSettings {
        ProfileSettings {
            name: self.name.clone(),
            description: self.description.clone(),
            protocol_type: self.protocol_type,
            catalog_path: self.catalog_path.clone(),
            share_username: self.share_username.clone(),
            share_password: self.share_password.clone(),
            share_domain: self.share_domain.clone(),
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct Delete {
    /// Profile name; the unique lookup key on the appliance.
    #[arg(long)]
    pub name: String,

    /// UUID of the vCenter instance the OMEVV requests are scoped to.
    #[arg(long, env = "OMCTL_VCENTER_UUID")]
    pub vcenter_uuid: Option<String>,
}
