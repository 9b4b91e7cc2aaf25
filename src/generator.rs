//! Password generator - alphabet assembly, feasibility check and constrained
//! random placement.

use rand::Rng;
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::charset::{CharacterGroup, CharacterPools, GroupPool};
use crate::config::{GenerationRequest, MAX_BULK_COUNT, MAX_LENGTH, MIN_BULK_COUNT, MIN_LENGTH};

/// Random position picks tried before falling back to scanning free slots.
const MAX_SLOT_ATTEMPTS: usize = 64;

/// Reasons a request yields no passwords.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("No character is enabled in any group")]
    EmptyAlphabet,
    #[error("{required} guaranteed or required characters do not fit in length {length}")]
    OverConstrained { required: usize, length: usize },
}

/// Concatenates every enabled pool in group order.
pub fn assemble_alphabet(pools: &CharacterPools) -> String {
    pools.iter().flat_map(|pool| pool.chars()).collect()
}

/// What every password of a request must contain.
struct Plan<'a> {
    alphabet: Vec<char>,
    guaranteed: Vec<char>,
    required: Vec<&'a GroupPool>,
}

fn plan(request: &GenerationRequest) -> Result<Plan<'_>, GenerationError> {
    debug_assert!((MIN_LENGTH..=MAX_LENGTH).contains(&request.length()));
    debug_assert!((MIN_BULK_COUNT..=MAX_BULK_COUNT).contains(&request.bulk_count()));

    let alphabet: Vec<char> = assemble_alphabet(request.pools()).chars().collect();
    if alphabet.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Generation skipped: empty alphabet");
        return Err(GenerationError::EmptyAlphabet);
    }

    // Guaranteed chars that are currently disabled are skipped for this run only.
    let guaranteed: Vec<char> = request
        .guaranteed()
        .iter()
        .copied()
        .filter(|c| alphabet.contains(c))
        .collect();

    let required: Vec<&GroupPool> = CharacterGroup::ALL
        .into_iter()
        .filter(|&g| request.require_one(g))
        .map(|g| request.pools().get(g))
        .filter(|pool| !pool.is_empty())
        .collect();

    let length = request.length();
    let fixed = guaranteed.len() + required.len();
    if guaranteed.len() > length || fixed > length {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            "Generation skipped: {} fixed characters for length {}",
            fixed,
            length
        );
        return Err(GenerationError::OverConstrained {
            required: fixed,
            length,
        });
    }

    Ok(Plan {
        alphabet,
        guaranteed,
        required,
    })
}

/// Checks that the request can produce at least one password.
pub fn validate(request: &GenerationRequest) -> Result<(), GenerationError> {
    plan(request).map(|_| ())
}

/// Generates `request.bulk_count()` passwords, or the reason none can be made.
///
/// Draws are sequential: the same seeded `rng` and request always give the
/// same batch.
pub fn try_generate<R>(request: &GenerationRequest, rng: &mut R) -> Result<Vec<String>, GenerationError>
where
    R: Rng + ?Sized,
{
    let plan = plan(request)?;

    let passwords = (0..request.bulk_count())
        .map(|_| generate_one(&plan, request.length(), &mut *rng))
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Generated {} password(s) of length {}",
        passwords.len(),
        request.length()
    );

    Ok(passwords)
}

/// Generates a batch; an infeasible request yields an empty batch.
pub fn generate<R>(request: &GenerationRequest, rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    try_generate(request, rng).unwrap_or_default()
}

fn generate_one<R>(plan: &Plan<'_>, length: usize, rng: &mut R) -> Result<String, GenerationError>
where
    R: Rng + ?Sized,
{
    let mut slots: Vec<Option<char>> = vec![None; length];
    let over_constrained = || GenerationError::OverConstrained {
        required: plan.guaranteed.len() + plan.required.len(),
        length,
    };

    for &c in &plan.guaranteed {
        let pos = free_slot(&slots, &mut *rng).ok_or_else(over_constrained)?;
        slots[pos] = Some(c);
    }

    for pool in &plan.required {
        let pos = free_slot(&slots, &mut *rng).ok_or_else(over_constrained)?;
        let chars: Vec<char> = pool.chars().collect();
        slots[pos] = Some(chars[rng.gen_range(0..chars.len())]);
    }

    Ok(slots
        .into_iter()
        .map(|slot| slot.unwrap_or_else(|| plan.alphabet[rng.gen_range(0..plan.alphabet.len())]))
        .collect())
}

/// Picks a uniformly random empty slot by rejection sampling.
///
/// Falls back to choosing among the remaining free slots after
/// `MAX_SLOT_ATTEMPTS` misses. `None` only when every slot is taken.
fn free_slot<R>(slots: &[Option<char>], rng: &mut R) -> Option<usize>
where
    R: Rng + ?Sized,
{
    for _ in 0..MAX_SLOT_ATTEMPTS {
        let pos = rng.gen_range(0..slots.len());
        if slots[pos].is_none() {
            return Some(pos);
        }
    }

    let free: Vec<usize> = slots
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| slot.is_none().then_some(i))
        .collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.gen_range(0..free.len())])
}

/// Async version that sends the generated batch via channel.
///
/// An infeasible request sends an empty batch.
#[cfg(feature = "async")]
pub async fn generate_tx<R>(request: &GenerationRequest, rng: &mut R, tx: mpsc::Sender<Vec<String>>)
where
    R: Rng + ?Sized,
{
    let passwords = generate(request, rng);

    if let Err(_e) = tx.send(passwords).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send generated passwords: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::config::Config;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[tokio::test]
    async fn test_generate_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut config = Config::default();
        config.set_bulk_count(3);

        let mut rng = StdRng::seed_from_u64(7);
        generate_tx(&config.request(), &mut rng, tx).await;

        let batch = rx.recv().await.expect("Should receive passwords");
        assert_eq!(batch.len(), 3);
    }

    #[tokio::test]
    async fn test_generate_tx_infeasible_sends_empty() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut config = Config::default();
        for group in CharacterGroup::ALL {
            config.set_group_enabled(group, false);
        }

        let mut rng = StdRng::seed_from_u64(7);
        generate_tx(&config.request(), &mut rng, tx).await;

        let batch = rx.recv().await.expect("Should receive passwords");
        assert!(batch.is_empty());
    }
}
