mod tests_invariants;
mod tests_scenarios;
