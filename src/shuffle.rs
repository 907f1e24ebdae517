//! Random source abstraction and the Fisher–Yates shuffle used for answer options.

/// A source of uniform floats in `[0, 1)`.
///
/// Every `rand::Rng` is a source; tests plug in a scripted one to get exact
/// swap sequences.
pub trait RandomSource {
  fn next_unit(&mut self) -> f64;
}

impl<R: rand::Rng> RandomSource for R {
  fn next_unit(&mut self) -> f64 {
    self.gen::<f64>()
  }
}

/// Shuffle `items` in place (backward Fisher–Yates) and hand the slice back.
///
/// For `k` from the last index down to 1, element `k` is swapped with
/// `floor(r * (k + 1))`, so every ordering is equally likely given an
/// unbiased source.
pub fn shuffle<'a, T, R>(items: &'a mut [T], rng: &mut R) -> &'a mut [T]
where
  R: RandomSource + ?Sized,
{
  for k in (1..items.len()).rev() {
    let j = ((rng.next_unit() * (k + 1) as f64) as usize).min(k);
    items.swap(k, j);
  }
  items
}

#[cfg(test)]
pub(crate) mod testing {
  use super::RandomSource;

  /// Replays a fixed list of values, cycling when exhausted.
  pub struct Scripted {
    values: Vec<f64>,
    pos: usize,
  }

  impl Scripted {
    pub fn new(values: &[f64]) -> Self {
      Self { values: values.to_vec(), pos: 0 }
    }

    /// Always picks index 0, i.e. every option moves one slot right.
    pub fn zeros() -> Self {
      Self::new(&[0.0])
    }

    /// Always picks `j == k`: the identity permutation.
    pub fn identity() -> Self {
      Self::new(&[0.999_999])
    }
  }

  impl RandomSource for Scripted {
    fn next_unit(&mut self) -> f64 {
      let v = self.values[self.pos % self.values.len()];
      self.pos += 1;
      v
    }
  }
}
