//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop,
//! for both the sequential and the parallel runner.

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_knapsack::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 800);
/// assert_eq!(config.max_generations, 100);
/// assert_eq!(config.tournament_size, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_knapsack::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(20)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of candidates in the population.
    ///
    /// Constant across generations.
    pub population_size: usize,

    /// Number of generations to evolve.
    pub max_generations: usize,

    /// Probability of flipping each gene of an offspring (0.0–1.0).
    ///
    /// Too high and the search degrades into random sampling; too low and
    /// the population converges prematurely.
    pub mutation_rate: f64,

    /// Number of candidates drawn (with replacement) per tournament.
    ///
    /// Higher values mean stronger selection pressure.
    pub tournament_size: usize,

    /// Fraction of the population copied unchanged into the next
    /// generation (0.0–1.0).
    ///
    /// Zero (the default) replaces the whole population every generation.
    pub elite_ratio: f64,

    /// Natural-selection culling before each generation's tournaments.
    ///
    /// With `Some(k)`, `k` distinct candidates fight, only the fittest of
    /// them survives, and tournaments draw from the survivors. This shrinks
    /// the breeding pool every generation, so it only pays off together with
    /// other tuning (more generations or elitism). `18` is a reasonable
    /// starting point. `None` (the default) disables it.
    pub culling_size: Option<usize>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Number of workers for [`ParallelGaRunner`](super::ParallelGaRunner).
    ///
    /// The population is split into this many slices, each with its own
    /// random stream, so results are reproducible for a fixed
    /// `(seed, workers)` pair. `None` uses rayon's current thread count.
    /// Ignored by the sequential runner.
    pub workers: Option<usize>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 800,
            max_generations: 100,
            mutation_rate: 0.1,
            tournament_size: 100,
            elite_ratio: 0.0,
            culling_size: None,
            seed: None,
            workers: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Enables culling with `k` contenders per round.
    pub fn with_culling_size(mut self, k: usize) -> Self {
        self.culling_size = Some(k);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the number of parallel workers.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Number of elites carried over each generation.
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_ratio) as usize
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be within [0, 1]".into());
        }
        if !(0.0..=1.0).contains(&self.elite_ratio) {
            return Err("elite_ratio must be within [0, 1]".into());
        }
        if self.elite_count() >= self.population_size {
            return Err("elite_ratio too high: elites fill entire population".into());
        }
        if let Some(k) = self.culling_size {
            if k < 2 || k >= self.population_size {
                return Err("culling_size must be in 2..population_size".into());
            }
        }
        if self.workers == Some(0) {
            return Err("workers must be positive or None".into());
        }
        Ok(())
    }
}
