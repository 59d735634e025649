use criterion::{criterion_group, criterion_main, Criterion};
use isa::ppc::instruction::Instruction;
use isa::ppc::opcode::OpcodeExt2;

// A spread over the interesting decode paths: D-form, both extended-table
// passes, the reserved fake/marker slot and a service call.
const WORDS: [u32; 10] = [
    0x3864_0005, // addi   r3, r4, 5
    0x4E80_0020, // blr
    0x7C64_2A14, // add    r3, r4, r5
    0x7C64_2E14, // addo   r3, r4, r5
    0x7C08_02A6, // mflr   r0
    0x7D82_1008, // twge   r2, r2
    0xFC21_102A, // fadd   f1, f1, f2
    0x4482_1008, // sc with the breakpoint payload
    0x0400_002B, // fake opcode, tag 43
    0x0600_0171, // stub marker 369
];

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("classify_words", |b| {
        b.iter(|| WORDS.map(|word| Instruction::from(word).kind()))
    });

    c.bench_function("extended_decode_retry", |b| {
        b.iter(|| {
            let natural = OpcodeExt2::try_from(0x7C64_2A14);
            let with_oe = OpcodeExt2::try_from(0x7C64_2E14);

            (natural, with_oe)
        })
    });

    c.bench_function("field_extraction", |b| {
        b.iter(|| {
            let instruction = Instruction::from(0x3864_0005);

            (
                instruction.rt_value(),
                instruction.ra_value(),
                instruction.signed_imm16(),
            )
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
