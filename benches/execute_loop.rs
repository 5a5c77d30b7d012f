use cpu6502::{run, FlatMemory, MemoryBus, RunConfig, CPU};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Tight mixed loop at 0x8000:
/// LDA #$42; STA $2000; LDX #$10; LDY #$20; INX; INY; DEX; DEY; ADC #$01; JMP $8000
const MIXED_LOOP: [u8; 18] = [
    0xA9, 0x42, 0x8D, 0x00, 0x20, 0xA2, 0x10, 0xA0, 0x20, 0xE8, 0xC8, 0xCA, 0x88, 0x69, 0x01, 0x4C,
    0x00, 0x80,
];

/// Decimal-mode counter: SED; CLC; LDA $10; ADC #$01; STA $10; JMP $8001
const DECIMAL_LOOP: [u8; 12] = [
    0xF8, 0x18, 0xA5, 0x10, 0x69, 0x01, 0x85, 0x10, 0x4C, 0x01, 0x80, 0xEA,
];

fn memory_with(program: &[u8]) -> FlatMemory {
    let mut memory = FlatMemory::with_reset_vector(0x8000);
    memory.write_block(0x8000, program);
    memory
}

fn bench_cpu_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpu6502_step");

    for step_count in [10u64, 100, 1000] {
        group.throughput(Throughput::Elements(step_count));
        group.bench_with_input(
            BenchmarkId::from_parameter(step_count),
            &step_count,
            |b, &count| {
                let mut memory = memory_with(&MIXED_LOOP);
                b.iter(|| {
                    let mut cpu = CPU::new(&mut memory);
                    for _ in 0..count {
                        let _ = cpu.step();
                    }
                    black_box(cpu.cycles);
                });
            },
        );
    }

    group.finish();
}

fn bench_run_for_cycles(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpu6502_run_for_cycles");

    for (name, program) in [("binary", &MIXED_LOOP[..]), ("decimal", &DECIMAL_LOOP[..])] {
        group.throughput(Throughput::Elements(100_000));
        group.bench_function(name, |b| {
            let mut cpu = CPU::new(memory_with(program));
            b.iter(|| black_box(cpu.run_for_cycles(100_000)));
        });
    }

    group.finish();
}

fn bench_runner(c: &mut Criterion) {
    // LDX #$00; loop: DEX; BNE loop; JMP *
    let program = [0xA2, 0x00, 0xCA, 0xD0, 0xFD, 0x4C, 0x05, 0x80];
    let config = RunConfig::default();

    c.bench_function("cpu6502_run_until_spin", |b| {
        b.iter(|| {
            let mut cpu = CPU::new(memory_with(&program));
            black_box(run(&mut cpu, &config))
        });
    });
}

criterion_group!(benches, bench_cpu_step, bench_run_for_cycles, bench_runner);
criterion_main!(benches);
