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

//! omctl: drive Dell out-of-band management endpoints from the command line.
//!
//! Each invocation runs exactly one handler (session create/delete, firmware
//! repository profile create/modify/delete), prints the structured result
//! report, and exits non-zero when the report is a failure.

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::args::{Cli, Command};
use crate::errors::OmctlResult;
use crate::output::cli_output;

mod args;
mod config;
mod errors;
mod firmware_profile;
mod output;
mod session;

#[tokio::main]
async fn main() -> OmctlResult<()> {
    let cli = Cli::parse();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();

    let file_config = config::get_config_from_file();
    tracing::debug!(check_mode = cli.check, "omctl started");

    let result = match &cli.command {
        Command::Session(cmd) => {
            session::cmds::dispatch(cmd, &cli, file_config.as_ref()).await?
        }
        Command::FirmwareRepositoryProfile(cmd) => {
            firmware_profile::cmds::dispatch(cmd, &cli, file_config.as_ref()).await?
        }
    };

    let failed = result.failed;
    cli_output(result, &cli.format)?;
    if failed {
        std::process::exit(1);
    }
    Ok(())
}
