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

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs, io};

use openmanage_rest::EndpointConfig;
use openmanage_rest::config::DEFAULT_PORT;
use serde::Deserialize;

use crate::args::EndpointArgs;
use crate::errors::{OmctlError, OmctlResult};

/// Optional settings file, relative to `$HOME`.
pub const CONFIG_FILE: &str = ".config/omctl.json";

#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub hostname: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub port: Option<u16>,
    pub ca_path: Option<PathBuf>,
    pub vcenter_uuid: Option<String>,
}

pub fn get_config_from_file() -> Option<FileConfig> {
    let home = env::var("HOME").ok()?;
    let file = Path::new(&home).join(CONFIG_FILE);
    if !file.exists() {
        return None;
    }
    let file = fs::File::open(file).ok()?;
    let reader = io::BufReader::new(file);
    serde_json::from_reader(reader).ok()
}

/// Resolve the endpoint settings. Flags and environment variables are
/// already merged by the argument parser, so the remaining order is
/// args > config file > default; hostname and credentials have no default.
pub fn resolve_endpoint(
    args: &EndpointArgs,
    file_config: Option<&FileConfig>,
) -> OmctlResult<EndpointConfig> {
    let hostname = args
        .hostname
        .clone()
        .or_else(|| file_config.and_then(|config| config.hostname.clone()))
        .ok_or(OmctlError::MissingSetting("hostname"))?;
    let username = args
        .username
        .clone()
        .or_else(|| file_config.and_then(|config| config.username.clone()))
        .ok_or(OmctlError::MissingSetting("username"))?;
    let password = args
        .password
        .clone()
        .or_else(|| file_config.and_then(|config| config.password.clone()))
        .ok_or(OmctlError::MissingSetting("password"))?;
    let port = args
        .port
        .or_else(|| file_config.and_then(|config| config.port))
        .unwrap_or(DEFAULT_PORT);
    let ca_path = args
        .ca_path
        .clone()
        .or_else(|| file_config.and_then(|config| config.ca_path.clone()));

    Ok(EndpointConfig::new(hostname, username, password)
        .with_port(port)
        .with_validate_certs(args.validate_certs)
        .with_ca_path(ca_path)
        .with_timeout(Duration::from_secs(args.timeout)))
}

/// The vCenter UUID scoping OMEVV requests: flag/env first, then the
/// config file.
pub fn resolve_vcenter_uuid(
    arg: Option<&str>,
    file_config: Option<&FileConfig>,
) -> OmctlResult<String> {
    arg.map(ToString::to_string)
        .or_else(|| file_config.and_then(|config| config.vcenter_uuid.clone()))
        .ok_or(OmctlError::MissingSetting("vcenter_uuid"))
}
