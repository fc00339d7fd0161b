//! Learning behaviour over many matches.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_td::{Board, LearningAgent, Mark, Participant, Tally, evaluate, self_play};

fn trained_pair(games: usize, seed: u64) -> (Vec<LearningAgent>, Tally) {
    let mut roster = vec![
        LearningAgent::seeded("agent-1", 0.4, seed + 1),
        LearningAgent::seeded("agent-2", 0.5, seed + 2),
    ];
    let mut rng = StdRng::seed_from_u64(seed);
    let tally = self_play(&mut roster, games, &mut rng).expect("agents always move");
    (roster, tally)
}

fn non_loss_rate_after_training(games: usize, eval_games: usize, seed: u64) -> f64 {
    let (mut roster, _) = trained_pair(games, seed);
    let mut candidate = roster.swap_remove(0).with_exploration(0.0);
    let mut opponent = LearningAgent::seeded("untrained", 0.5, seed + 100).with_exploration(0.0);
    let mut rng = StdRng::seed_from_u64(seed + 200);
    let tally = evaluate(&mut candidate, &mut opponent, eval_games, &mut rng)
        .expect("agents always move");
    assert_eq!(tally.games(), eval_games);
    tally.non_loss_rate(0)
}

#[test]
fn test_untrained_first_move_is_uniform() {
    let mut agent = LearningAgent::seeded("fresh", 0.5, 11).with_exploration(0.0);
    agent.assign_mark(Mark::O);
    let mut counts = [0usize; 9];
    for _ in 0..9000 {
        let index = agent
            .choose_move(&Board::new())
            .ok()
            .flatten()
            .expect("empty board");
        counts[index] += 1;
    }
    // expected 1000 each, standard deviation about 30
    for (cell, count) in counts.iter().enumerate() {
        assert!(
            (850..=1150).contains(count),
            "cell {} chosen {} times: {:?}",
            cell,
            count,
            counts
        );
    }
}

#[test]
fn test_self_play_fills_value_tables() {
    let (roster, tally) = trained_pair(500, 3);
    assert_eq!(tally.games(), 500);
    assert_eq!(tally.wins(0) + tally.wins(1) + tally.draws(), 500);
    assert_eq!(tally.wins(0), tally.losses(1));
    for agent in &roster {
        assert!(agent.values().len() > 100, "{:?}", agent);
    }
}

#[test]
fn test_seeded_training_is_reproducible() {
    let (first, first_tally) = trained_pair(300, 17);
    let (second, second_tally) = trained_pair(300, 17);
    assert_eq!(first_tally, second_tally);
    assert_eq!(first[0].values().len(), second[0].values().len());
    for (board, value) in first[0].values().iter() {
        assert_eq!(second[0].values().get(board), *value);
    }
}

#[test]
fn test_larger_roster_trains_every_agent() {
    let mut roster: Vec<LearningAgent> = (0..3)
        .map(|i| LearningAgent::seeded(format!("agent-{}", i + 1), 0.5, 50 + i))
        .collect();
    let mut rng = StdRng::seed_from_u64(49);
    let tally = self_play(&mut roster, 600, &mut rng).expect("agents always move");

    assert_eq!(tally.games(), 600);
    let losses: usize = (0..3).map(|i| tally.losses(i)).sum();
    let wins: usize = (0..3).map(|i| tally.wins(i)).sum();
    assert_eq!(wins, losses);
    for agent in &roster {
        assert!(!agent.values().is_empty(), "{} never played", agent.name());
    }
}

#[test]
fn test_trained_agent_non_loss_rate_reaches_95_percent() {
    let rate = non_loss_rate_after_training(20_000, 1_000, 2024);
    assert!(rate >= 0.95, "non-loss rate {rate}");
}
