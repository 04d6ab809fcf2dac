//! Run-seed selection: an explicit `--seed` flag wins, otherwise a mixed
//! entropy seed is generated at startup. The simulation itself never touches
//! a clock or a global RNG; all randomness enters through this value.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

static SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Mix wall time, pid and a process-local counter into a run seed. The
/// counter keeps two sessions started in the same nanosecond apart.
pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy =
        (now_nanos as u64) ^ ((now_nanos >> 64) as u64) ^ pid.rotate_left(17) ^ counter.rotate_left(7);
    mix(entropy)
}

/// Pick the run seed from the process arguments: `--seed N` or `--seed=N`.
pub fn resolve_seed_from_args(args: &[String], generated_seed: u64) -> Result<SeedChoice, String> {
    let mut chosen = None;
    let mut arguments = args.iter().skip(1).peekable();

    while let Some(argument) = arguments.next() {
        let value = if argument == "--seed" {
            let Some(value) = arguments.next() else {
                return Err("missing value for --seed".to_string());
            };
            value.as_str()
        } else if let Some(value) = argument.strip_prefix("--seed=") {
            value
        } else {
            continue;
        };

        if chosen.is_some() {
            return Err("seed provided more than once".to_string());
        }
        chosen = Some(
            value
                .parse::<u64>()
                .map_err(|_| format!("seed value '{value}' must be a number"))?,
        );
    }

    Ok(match chosen {
        Some(seed) => SeedChoice::Cli(seed),
        None => SeedChoice::Generated(generated_seed),
    })
}

fn mix(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
