// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use emu_helpers::helpers::bcd::inc_bcd_byte;
use emu_helpers::helpers::bit_cast::bit_cast;
use emu_helpers::helpers::bits::{get_bits, is_bit_set};
use emu_helpers::helpers::rotate::rotr;
use emu_helpers::helpers::sign_extend::sign_extend32;
use emu_helpers::helpers::static_for::{generate_table, TableGen};
use std::hint::black_box;

fn decode_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    // Field extraction on an ARM data-processing word
    group.bench_function("get_bits", |b| {
        b.iter(|| {
            let instr = black_box(0xE081_2003u32);
            black_box((
                get_bits::<28, 4, _>(instr),
                get_bits::<21, 4, _>(instr),
                get_bits::<16, 4, _>(instr),
                get_bits::<12, 4, _>(instr),
                is_bit_set(instr, 20),
            ))
        });
    });

    // 24-bit branch offset
    group.bench_function("sign_extend32", |b| {
        b.iter(|| black_box(sign_extend32(black_box(0x00FF_FFFE), 24) << 2));
    });

    for rot in [0, 1, 15] {
        group.bench_with_input(BenchmarkId::new("rotr_immediate", rot), &rot, |b, &rot| {
            b.iter(|| black_box(rotr(black_box(0xFFu32), 2 * rot)));
        });
    }

    group.finish();
}

fn misc_benchmark(c: &mut Criterion) {
    c.bench_function("inc_bcd_byte", |b| {
        b.iter(|| {
            let mut v = black_box(0x00u8);
            for _ in 0..59 {
                v = inc_bcd_byte(v);
            }
            black_box(v)
        });
    });

    c.bench_function("bit_cast_f32", |b| {
        b.iter(|| black_box(bit_cast::<u32, f32>(black_box(1.5))));
    });
}

type Handler = fn(u32) -> u32;

fn handler<const I: usize>(x: u32) -> u32 {
    x.wrapping_add(I as u32)
}

struct Table;

impl TableGen for Table {
    type Entry = Handler;

    fn entry<const I: usize>() -> Handler {
        handler::<I>
    }
}

fn tablegen_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("tablegen");

    group.bench_function("generate_256", |b| {
        b.iter(|| black_box(generate_table::<Table, 256>(handler::<0>)));
    });

    let table = generate_table::<Table, 256>(handler::<0>);
    group.bench_function("dispatch", |b| {
        b.iter(|| {
            let op = black_box(0x7Fusize);
            black_box(table[op](black_box(1)))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    decode_benchmark,
    misc_benchmark,
    tablegen_benchmark
);
criterion_main!(benches);
