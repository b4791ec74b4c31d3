// Curlcast - Shell HTTP Invocation Translator
//
// Copyright (c) 2025 Curlcast contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Benchmarks for the full translation pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curlcast::{tokenize, translate, Dialect};

const POSIX_INPUT: &str = "curl -X POST 'https://api.example.com/data' -H 'Content-Type: application/json' -H 'Authorization: Bearer token' -d '{\"key\":\"value\"}'";
const PS_INPUT: &str = "Invoke-WebRequest -Uri 'https://api.example.com/data' -Method POST -Headers @{ 'Content-Type'='application/json'; 'Authorization'='Bearer token' } -Body '{\"key\":\"value\"}'";

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_posix", |b| {
        b.iter(|| tokenize(black_box(POSIX_INPUT), Dialect::Posix))
    });
    c.bench_function("tokenize_powershell", |b| {
        b.iter(|| tokenize(black_box(PS_INPUT), Dialect::PowerShell))
    });
}

fn bench_translate(c: &mut Criterion) {
    c.bench_function("translate_posix_to_powershell", |b| {
        b.iter(|| translate(black_box(POSIX_INPUT), Dialect::Posix, Dialect::PowerShell))
    });
    c.bench_function("translate_powershell_to_posix", |b| {
        b.iter(|| translate(black_box(PS_INPUT), Dialect::PowerShell, Dialect::Posix))
    });
    c.bench_function("translate_posix_to_cmd", |b| {
        b.iter(|| translate(black_box(POSIX_INPUT), Dialect::Posix, Dialect::Cmd))
    });
}

criterion_group!(benches, bench_tokenize, bench_translate);
criterion_main!(benches);
