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

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::firmware_profile::args::CmdProfile;
use crate::output::OutputFormat;
use crate::session::args::CmdSession;

/// omctl drives Dell out-of-band management endpoints over REST: iDRAC
/// Redfish sessions and OMEVV firmware repository profiles.
#[derive(Debug, Parser)]
#[command(name = "omctl", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub endpoint: EndpointArgs,

    /// Report what would change without mutating the endpoint.
    #[arg(long, global = true)]
    pub check: bool,

    /// Output format for the result report.
    #[arg(long, global = true, value_enum, default_value = "ascii-table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage iDRAC Redfish sessions.
    #[command(subcommand)]
    Session(CmdSession),
    /// Manage OMEVV firmware repository profiles.
    #[command(subcommand, name = "firmware-repository-profile")]
    FirmwareRepositoryProfile(CmdProfile),
}

/// Connection settings for the target endpoint. Each value resolves in
/// order: flag, environment variable, then `$HOME/.config/omctl.json`.
#[derive(Debug, clap::Args)]
pub struct EndpointArgs {
    /// Endpoint hostname or IP (iDRAC, or the OMEVV appliance).
    #[arg(long, global = true, env = "OMCTL_HOSTNAME")]
    pub hostname: Option<String>,

    #[arg(long, global = true, env = "OMCTL_USERNAME")]
    pub username: Option<String>,

    #[arg(long, global = true, env = "OMCTL_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// HTTPS port of the endpoint.
    #[arg(long, global = true, env = "OMCTL_PORT")]
    pub port: Option<u16>,

    /// Whether to validate the endpoint's TLS certificate. Disable for lab
    /// controllers with self-signed certificates.
    #[arg(
        long,
        global = true,
        env = "OMCTL_VALIDATE_CERTS",
        action = clap::ArgAction::Set,
        default_value_t = true
    )]
    pub validate_certs: bool,

    /// PEM bundle to trust instead of the system roots.
    #[arg(long, global = true, env = "OMCTL_CA_PATH")]
    pub ca_path: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout: u64,
}
