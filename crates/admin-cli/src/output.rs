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

// General utility code for displaying result reports on the CLI.

use clap::ValueEnum;
use model::ModuleResult;
use openmanage_rest::RestError;
use serde::Serialize;

use crate::errors::{OmctlError, OmctlResult};

#[derive(Default, PartialEq, Eq, ValueEnum, Clone, Copy, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum OutputFormat {
    #[default]
    AsciiTable,
    Json,
    Yaml,
}

/// ToTable is a trait used alongside cli_output for prettytable printing.
pub trait ToTable {
    fn into_table(self) -> eyre::Result<String>
    where
        Self: Sized,
    {
        Ok("not implemented".to_string())
    }
}

/// cli_output renders a Serialize + ToTable value in the requested format
/// and prints it to stdout.
pub fn cli_output<T: Serialize + ToTable>(input: T, format: &OutputFormat) -> OmctlResult<()> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&input)?,
        OutputFormat::Yaml => serde_yaml::to_string(&input)?,
        OutputFormat::AsciiTable => input
            .into_table()
            .map_err(|e| OmctlError::GenericError(e.to_string()))?,
    };
    println!("{output}");
    Ok(())
}

/// Collapse a handler outcome into the final report: REST errors become
/// non-failing or failing reports per the flat taxonomy instead of aborting
/// with a raw error.
pub fn finish(outcome: Result<ModuleResult, RestError>) -> ModuleResult {
    match outcome {
        Ok(result) => result,
        Err(err) => ModuleResult::from_rest_error(&err),
    }
}

impl ToTable for ModuleResult {
    fn into_table(self) -> eyre::Result<String> {
        let mut table = prettytable::Table::new();
        table.add_row(prettytable::row!["field", "value"]);
        table.add_row(prettytable::row!["changed", self.changed]);
        table.add_row(prettytable::row!["failed", self.failed]);
        table.add_row(prettytable::row!["msg", self.msg]);
        if let Some(token) = &self.x_auth_token {
            table.add_row(prettytable::row!["x_auth_token", token]);
        }
        if let Some(session_data) = &self.session_data {
            table.add_row(prettytable::row![
                "session_data",
                serde_json::to_string_pretty(session_data)?
            ]);
        }
        if let Some(profile) = &self.profile {
            table.add_row(prettytable::row![
                "profile",
                serde_json::to_string_pretty(profile)?
            ]);
        }
        if let Some(diff) = &self.diff {
            table.add_row(prettytable::row![
                "diff",
                serde_json::to_string_pretty(diff)?
            ]);
        }
        Ok(table.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_table_lists_the_payload_rows_that_are_set() {
        let table = ModuleResult::changed("The session has been created successfully.")
            .with_auth_token(Some("token123".into()))
            .into_table()
            .unwrap();
        assert!(table.contains("changed"));
        assert!(table.contains("token123"));
        assert!(!table.contains("profile"));
    }
}
