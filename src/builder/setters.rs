use crate::builder::config::InductionConfig;
use crate::builder::TreeBuilder;
use crate::metrics::EntropyMethod;

impl TreeBuilder {
    // Set methods for paramters

    /// Replace the whole configuration of the builder.
    /// * `cfg` - The configuration to use.
    pub fn with_config(mut self, cfg: InductionConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the entropy formula on the builder.
    /// * `entropy` - `Binary` fails on more than two class values, `Shannon`
    ///   handles any number of them.
    pub fn set_entropy(mut self, entropy: EntropyMethod) -> Self {
        self.cfg.entropy = entropy;
        self
    }

    /// Set whether candidate attributes are evaluated in parallel.
    /// * `parallel` - Evaluate the attributes of a node on a thread pool.
    pub fn set_parallel(mut self, parallel: bool) -> Self {
        self.cfg.parallel = parallel;
        self
    }

    /// Set the number of threads on the builder.
    /// * `num_threads` - Set the number of threads to be used when `parallel` is set.
    pub fn set_num_threads(mut self, num_threads: Option<usize>) -> Self {
        self.cfg.num_threads = num_threads;
        self
    }
}
