use criterion::{black_box, criterion_group, criterion_main, Criterion};
use morse_core::hal::mock::{MockGameHal, ScriptedTargets};
use morse_core::test_utils::player::answer_correctly;
use morse_core::*;

fn bench_decode(c: &mut Criterion) {
    let sequences: Vec<Sequence> = (0..TABLE_LEN).map(table::lookup).collect();

    c.bench_function("decode_full_table", |b| {
        b.iter(|| {
            for sequence in &sequences {
                black_box(decode(black_box(sequence)));
            }
        })
    });

    let miss = parse_sequence("--.--").unwrap_or_default();
    c.bench_function("decode_miss", |b| b.iter(|| decode(black_box(&miss))));
}

fn bench_round(c: &mut Criterion) {
    c.bench_function("ten_round_game", |b| {
        b.iter(|| {
            let mut game = MorseGame::new(
                MockGameHal::new(),
                ScriptedTargets::new(&[]).with_fallback(17),
                GameConfig::default(),
            );
            game.start();
            for event in [InputEvent::Dot, InputEvent::Dot, InputEvent::Dash, InputEvent::Dash, InputEvent::Dash] {
                game.handle_event(event);
            }
            for _ in 0..5 {
                answer_correctly(&mut game);
            }
            black_box(game.state())
        })
    });
}

criterion_group!(benches, bench_decode, bench_round);
criterion_main!(benches);
