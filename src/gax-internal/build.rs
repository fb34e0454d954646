// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Records the compiler version for the `x-goog-api-client` header.

use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = std::env::var_os("OUT_DIR").expect("OUT_DIR not specified");
    let rust_version = rustc_version::version().expect("cannot retrieve the rustc version");
    let mut f = std::fs::File::create(Path::new(&out_dir).join("build_env.rs"))
        .expect("cannot create build_env.rs");
    writeln!(f, "pub(crate) const RUSTC_VERSION: &str = \"{rust_version}\";")
        .expect("cannot write build_env.rs");
}
