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

use openmanage_rest::RestError;

#[derive(thiserror::Error, Debug)]
pub enum OmctlError {
    #[error(
        "Missing connection setting '{0}'. Pass it as a flag, set the OMCTL_* environment variable, or add it to $HOME/.config/omctl.json"
    )]
    MissingSetting(&'static str),

    #[error(transparent)]
    Rest(#[from] RestError),

    #[error("Error while handling json: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Error while handling yaml: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("I/O error. Does the file exist? {0}")]
    IOError(#[from] std::io::Error),

    #[error("Generic Error: {0}")]
    GenericError(String),
}

pub type OmctlResult<T> = Result<T, OmctlError>;
