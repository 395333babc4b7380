use derive_more::{Display, From};
use itertools::Itertools;

use crate::error::MixError;

pub const DECRYPTION_KEY: i64 = 811_589_153;
pub const DECRYPTION_ROUNDS: usize = 10;

const CHECKSUM_OFFSETS: [usize; 3] = [1000, 2000, 3000];

/// Index of an element in the input, fixed at load time.
#[derive(Debug, Display, From, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OriginalPosition(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub original_position: OriginalPosition,
    pub value: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixConfig {
    /// Every value is multiplied by this before mixing.
    pub key: i64,
    /// Number of full passes over the input order.
    pub rounds: usize,
}

impl MixConfig {
    pub fn single_pass() -> Self {
        Self { key: 1, rounds: 1 }
    }

    pub fn decrypt() -> Self {
        Self {
            key: DECRYPTION_KEY,
            rounds: DECRYPTION_ROUNDS,
        }
    }
}

impl Default for MixConfig {
    fn default() -> Self {
        Self::single_pass()
    }
}

/// A sequence that has not been mixed yet.
#[derive(Debug, Clone)]
pub struct Mixer {
    elements: Vec<Element>,
    rounds: usize,
}

impl Mixer {
    pub fn new(values: &[i64]) -> Result<Self, MixError> {
        Self::with_config(values, MixConfig::default())
    }

    pub fn with_config(values: &[i64], config: MixConfig) -> Result<Self, MixError> {
        if values.len() < 2 {
            return Err(MixError::DegenerateInput(values.len()));
        }
        let elements = values
            .iter()
            .enumerate()
            .map(|(i, &value)| -> Result<Element, MixError> {
                let value = value.checked_mul(config.key).ok_or(MixError::Overflow {
                    value,
                    key: config.key,
                })?;
                Ok(Element {
                    original_position: i.into(),
                    value,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            elements,
            rounds: config.rounds,
        })
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Run every configured round. Each round moves every element once, in
    /// input order, against the sequence as left by all earlier moves.
    pub fn mix(self) -> Mixed {
        let Mixer {
            mut elements,
            rounds,
        } = self;
        let order = elements.clone();
        for round in 0..rounds {
            for element in order.iter() {
                move_element(&mut elements, element);
            }
            log::debug!("finished round {} of {}", round + 1, rounds);
        }
        Mixed { elements }
    }
}

fn move_element(sequence: &mut Vec<Element>, element: &Element) {
    let from_idx = sequence
        .iter()
        .position(|e| e == element)
        .expect("mixing never drops an element");
    // the moving element is out of the ring while it moves, so it only
    // steps over the other N - 1
    let modulus = (sequence.len() - 1) as i64;
    let to_idx =
        (from_idx as i64 + element.value.rem_euclid(modulus)).rem_euclid(modulus) as usize;
    let item = sequence.remove(from_idx);
    sequence.insert(to_idx, item);
    log::trace!(
        "moved {} (#{}) from {} to {}",
        element.value,
        element.original_position,
        from_idx,
        to_idx
    );
}

/// A mixed sequence. Read-only from here on.
#[derive(Debug, Clone)]
pub struct Mixed {
    elements: Vec<Element>,
}

impl Mixed {
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.elements.iter().map(|e| e.value)
    }

    pub fn zero_index(&self) -> Result<usize, MixError> {
        self.elements
            .iter()
            .positions(|e| e.value == 0)
            .exactly_one()
            .map_err(|found| match found.count() {
                0 => MixError::MissingZero,
                n => MixError::AmbiguousZero(n),
            })
    }

    pub fn checksum(&self) -> Result<i64, MixError> {
        let zero_index = self.zero_index()?;
        let len = self.elements.len();
        CHECKSUM_OFFSETS
            .into_iter()
            .map(|offset| self.elements[(zero_index + offset) % len].value)
            .try_fold(0i64, |acc, value| acc.checked_add(value))
            .ok_or(MixError::ChecksumOverflow)
    }
}
