use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

use crate::states::{Prize, RaffleEntry};

/// Expand a 32-byte randomness seed into a u64 for draw round `round`.
/// Deterministic for a fixed (seed, round) pair so multi-rank draws from
/// one seed stay reproducible.
pub fn expand_randomness(randomness: &[u8; 32], round: u64) -> u64 {
    let mut hasher = keccak::Hasher::default();
    hasher.hash(randomness);
    hasher.hash(&round.to_le_bytes());

    u64::from_le_bytes(
        hasher.result().to_bytes()[0..8]
            .try_into()
            .expect("slice with incorrect length"),
    )
}

/// Sum of weights over the drawable entries. `None` on overflow.
pub fn total_active_weight(prizes: &[Prize]) -> Option<u64> {
    prizes
        .iter()
        .filter(|p| p.is_drawable())
        .try_fold(0u64, |acc, p| acc.checked_add(p.probability))
}

/// Cumulative-weight bucketing over the drawable entries, in stable pool
/// order: the first bucket whose cumulative sum exceeds `roll` wins.
/// Returns `None` when nothing is drawable or all drawable weights are
/// zero, which callers must treat as a no-win (never an error).
pub fn pick_weighted(prizes: &[Prize], roll: u64) -> Option<usize> {
    let mut cumulative = 0u64;
    for (index, prize) in prizes.iter().enumerate() {
        if !prize.is_drawable() {
            continue;
        }
        cumulative = cumulative.saturating_add(prize.probability);
        if roll < cumulative {
            return Some(index);
        }
    }
    None
}

/// Draw up to `num_winners` ranked winners from a weighted entry pool
/// without replacement: once a user wins a rank, all of their entries are
/// removed before the next rank is drawn. Ranks with an empty pool are
/// left unawarded, so the result may be shorter than `num_winners`.
pub fn draw_ranked_winners(
    entries: &[RaffleEntry],
    num_winners: u8,
    randomness: &[u8; 32],
) -> Vec<(u8, Pubkey)> {
    let mut pool: Vec<RaffleEntry> = entries.to_vec();
    let mut winners: Vec<(u8, Pubkey)> = Vec::with_capacity(num_winners as usize);

    for rank in 0..num_winners {
        let total: u64 = pool.iter().map(|e| e.weight as u64).sum();
        if total == 0 {
            break;
        }

        let roll = expand_randomness(randomness, rank as u64) % total;

        let mut cumulative = 0u64;
        let mut winner = pool[0].user;
        for entry in &pool {
            cumulative += entry.weight as u64;
            if roll < cumulative {
                winner = entry.user;
                break;
            }
        }

        winners.push((rank, winner));
        pool.retain(|e| e.user != winner);
    }

    winners
}

/// Strict window rule: a repeat becomes possible at exactly `last + window`.
pub fn window_elapsed(last: i64, now: i64, window: i64) -> bool {
    now.saturating_sub(last) >= window
}

/// Apply a signed ledger delta to a non-negative balance. `None` when an
/// award would overflow or a debit would take the balance below zero;
/// the caller maps the two cases to distinct errors by the delta's sign.
pub fn apply_delta(balance: u64, delta: i64) -> Option<u64> {
    if delta >= 0 {
        balance.checked_add(delta as u64)
    } else {
        balance.checked_sub(delta.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::PrizeKind;

    fn prize(probability: u64, stock: u32) -> Prize {
        Prize {
            kind: PrizeKind::Product,
            probability,
            stock,
            is_active: true,
        }
    }

    #[test]
    fn test_expand_randomness_is_deterministic() {
        let seed = [7u8; 32];
        assert_eq!(expand_randomness(&seed, 0), expand_randomness(&seed, 0));
        assert_ne!(expand_randomness(&seed, 0), expand_randomness(&seed, 1));
    }

    #[test]
    fn test_pick_weighted_buckets_in_pool_order() {
        let pool = vec![prize(10, 5), prize(30, 5), prize(60, 5)];

        assert_eq!(pick_weighted(&pool, 0), Some(0));
        assert_eq!(pick_weighted(&pool, 9), Some(0));
        assert_eq!(pick_weighted(&pool, 10), Some(1));
        assert_eq!(pick_weighted(&pool, 39), Some(1));
        assert_eq!(pick_weighted(&pool, 40), Some(2));
        assert_eq!(pick_weighted(&pool, 99), Some(2));
    }

    #[test]
    fn test_pick_weighted_skips_exhausted_and_inactive() {
        let mut pool = vec![prize(50, 0), prize(50, 1)];
        // first entry has no stock: every roll lands on the second
        assert_eq!(pick_weighted(&pool, 0), Some(1));
        assert_eq!(pick_weighted(&pool, 49), Some(1));

        pool[1].is_active = false;
        assert_eq!(pick_weighted(&pool, 0), None);
    }

    #[test]
    fn test_empty_pool_is_no_win() {
        assert_eq!(pick_weighted(&[], 0), None);
        assert_eq!(total_active_weight(&[]), Some(0));
    }

    #[test]
    fn test_zero_weight_pool_is_no_win() {
        // all remaining entries at probability 0: deterministic no-win
        let pool = vec![prize(0, 5), prize(0, 5)];
        assert_eq!(total_active_weight(&pool), Some(0));
        assert_eq!(pick_weighted(&pool, 0), None);
    }

    #[test]
    fn test_stock_one_prize_wins_at_most_once() {
        let mut pool = vec![prize(100, 1)];
        let seed = [3u8; 32];

        let mut wins = 0;
        for round in 0..20 {
            let total = total_active_weight(&pool).unwrap();
            if total == 0 {
                continue;
            }
            let roll = expand_randomness(&seed, round) % total;
            if let Some(i) = pick_weighted(&pool, roll) {
                pool[i].stock -= 1;
                wins += 1;
            }
        }

        assert_eq!(wins, 1);
        assert_eq!(pool[0].stock, 0);
    }

    fn entry(user: Pubkey, weight: u16) -> RaffleEntry {
        RaffleEntry { user, weight }
    }

    #[test]
    fn test_raffle_no_double_winner() {
        let users: Vec<Pubkey> = (0..5).map(|_| Pubkey::new_unique()).collect();
        let entries: Vec<RaffleEntry> = users
            .iter()
            .enumerate()
            .map(|(i, u)| entry(*u, (i as u16 % 3) + 1))
            .collect();

        let winners = draw_ranked_winners(&entries, 3, &[9u8; 32]);

        assert_eq!(winners.len(), 3);
        for (expected_rank, (rank, _)) in winners.iter().enumerate() {
            assert_eq!(*rank, expected_rank as u8);
        }
        let mut seen: Vec<Pubkey> = winners.iter().map(|(_, u)| *u).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_raffle_short_pool_leaves_ranks_unawarded() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let entries = vec![entry(a, 3), entry(b, 1)];

        // 5 ranks but only 2 distinct users: exactly 2 ranks awarded
        let winners = draw_ranked_winners(&entries, 5, &[1u8; 32]);
        assert_eq!(winners.len(), 2);
        assert_ne!(winners[0].1, winners[1].1);
    }

    #[test]
    fn test_raffle_empty_pool_awards_nothing() {
        let winners = draw_ranked_winners(&[], 3, &[5u8; 32]);
        assert!(winners.is_empty());
    }

    #[test]
    fn test_raffle_multiple_entries_same_user_win_once() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let entries = vec![entry(a, 3), entry(a, 3), entry(a, 3), entry(b, 1)];

        let winners = draw_ranked_winners(&entries, 2, &[42u8; 32]);
        assert_eq!(winners.len(), 2);
        assert_ne!(winners[0].1, winners[1].1);
    }

    #[test]
    fn test_apply_delta_conserves_balance() {
        // balance after any committed sequence equals the running sum
        let deltas: [i64; 6] = [100, -30, 10, 10, -90, 25];
        let mut balance = 0u64;
        let mut sum = 0i64;
        for d in deltas {
            balance = apply_delta(balance, d).unwrap();
            sum += d;
        }
        assert_eq!(balance, sum as u64);
    }

    #[test]
    fn test_apply_delta_rejects_overdraft_and_overflow() {
        assert_eq!(apply_delta(5, -6), None);
        assert_eq!(apply_delta(5, -5), Some(0));
        assert_eq!(apply_delta(u64::MAX, 1), None);
    }

    #[test]
    fn test_window_boundary_is_strict() {
        // rejected one second before expiry, allowed at exactly last + window
        assert!(!window_elapsed(1_000, 1_000 + 86_399, 86_400));
        assert!(window_elapsed(1_000, 1_000 + 86_400, 86_400));
        assert!(window_elapsed(0, 1, 0));
    }
}
