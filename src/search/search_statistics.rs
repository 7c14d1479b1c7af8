use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: i64,
    /// Number of nodes evaluated by a heuristic
    evaluated_nodes: i64,
    /// Number of successors generated, including the pruned ones
    generated_nodes: i64,
    /// Number of successors discarded as repeated states
    pruned_nodes: i64,
    /// Number of successors not generated because of the depth bound
    cut_off_nodes: i64,
    /// Number of general search runs, more than one only for iterative
    /// deepening
    iterations: i64,
    /// Largest frontier seen
    peak_frontier_size: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            evaluated_nodes: 0,
            generated_nodes: 0,
            pruned_nodes: 0,
            cut_off_nodes: 0,
            iterations: 0,
            peak_frontier_size: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes as i64;
        self.log_if_needed();
    }

    pub fn increment_pruned_nodes(&mut self) {
        self.pruned_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_cut_off_nodes(&mut self, num_nodes: usize) {
        self.cut_off_nodes += num_nodes as i64;
        self.log_if_needed();
    }

    pub fn increment_iterations(&mut self) {
        self.iterations += 1;
    }

    pub fn register_frontier_size(&mut self, size: usize) {
        self.peak_frontier_size = self.peak_frontier_size.max(size);
    }

    pub fn expanded_nodes(&self) -> i64 {
        self.expanded_nodes
    }

    pub fn evaluated_nodes(&self) -> i64 {
        self.evaluated_nodes
    }

    pub fn generated_nodes(&self) -> i64 {
        self.generated_nodes
    }

    pub fn pruned_nodes(&self) -> i64 {
        self.pruned_nodes
    }

    pub fn cut_off_nodes(&self) -> i64 {
        self.cut_off_nodes
    }

    pub fn iterations(&self) -> i64 {
        self.iterations
    }

    pub fn peak_frontier_size(&self) -> usize {
        self.peak_frontier_size
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            evaluated_nodes = self.evaluated_nodes,
            generated_nodes = self.generated_nodes,
            pruned_nodes = self.pruned_nodes,
            cut_off_nodes = self.cut_off_nodes,
            iterations = self.iterations,
            peak_frontier_size = self.peak_frontier_size,
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
