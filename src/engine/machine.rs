//! Pushdown automaton that runs input strings against a transition table.

use super::config::EngineConfig;
use super::error::RunError;
use super::outcome::{LineOutcome, RunReport, Verdict};
use crate::builder::PdaBuilder;
use crate::core::{StateId, SymbolStack, Trace, Trigger};
use crate::table::TransitionTable;
use log::{debug, trace};

/// Deterministic pushdown automaton.
///
/// Owns the current state, the stack and the trace of the last run. The
/// table is never modified and can serve any number of runs.
#[derive(Clone, Debug)]
pub struct Pda {
    table: TransitionTable,
    config: EngineConfig,
    current: StateId,
    stack: SymbolStack,
    trace: Trace,
}

impl Pda {
    /// Create an engine over `table` with the default configuration.
    pub fn new(table: TransitionTable) -> Self {
        Self::with_config(table, EngineConfig::default())
    }

    /// Create an engine in its initial state with a seeded stack.
    ///
    /// `config` must already be validated; outside the crate engines with a
    /// custom configuration come from [`PdaBuilder`].
    pub(crate) fn with_config(table: TransitionTable, config: EngineConfig) -> Self {
        Self {
            current: config.initial_state,
            stack: SymbolStack::seeded(config.bottom_marker.as_str()),
            trace: Trace::new(),
            table,
            config,
        }
    }

    pub fn builder() -> PdaBuilder {
        PdaBuilder::new()
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> StateId {
        self.current
    }

    pub fn stack(&self) -> &SymbolStack {
        &self.stack
    }

    /// Steps fired by the most recent run, including a failed one.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Put state, stack and trace back to how the engine was built.
    pub fn reset(&mut self) {
        self.current = self.config.initial_state;
        self.stack.reset_to(&self.config.bottom_marker);
        self.trace.clear();
    }

    /// Run one input string.
    ///
    /// Consumes every character through the first applicable transition,
    /// then applies epsilon transitions until none is applicable, then
    /// compares the reached state with the accepting state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pushdown::engine::{Pda, Verdict};
    /// use pushdown::table::TransitionTable;
    ///
    /// let (table, _) = TransitionTable::parse("2\n0 1 a - x ;\n1 2 - x ;").unwrap();
    /// let mut pda = Pda::new(table);
    ///
    /// let report = pda.run("a").unwrap();
    /// assert_eq!(report.verdict, Verdict::Accepted);
    /// assert_eq!(pda.stack().top(), Some("e"));
    ///
    /// assert!(pda.run("b").is_err());
    /// ```
    pub fn run(&mut self, input: &str) -> Result<RunReport, RunError> {
        self.current = self.config.initial_state;
        self.trace.clear();
        if self.config.reset_stack_between_runs {
            self.stack.reset_to(&self.config.bottom_marker);
        }

        let mut consumed = 0;
        for (position, symbol) in input.chars().enumerate() {
            self.consume(symbol, position)?;
            consumed += 1;
        }

        let epsilon_moves = self.close_epsilon()?;

        let verdict = if self.table.is_accepting(self.current) {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        };
        debug!(
            "run over {consumed} symbol(s) ended in state {} ({verdict:?})",
            self.current
        );

        Ok(RunReport {
            verdict,
            final_state: self.current,
            consumed,
            epsilon_moves,
            stack_depth: self.stack.depth(),
        })
    }

    /// Run each line in order, collecting every outcome.
    pub fn run_lines<I, S>(&mut self, lines: I) -> Vec<LineOutcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        lines
            .into_iter()
            .map(|line| {
                let line = line.into();
                let result = self.run(&line);
                LineOutcome { line, result }
            })
            .collect()
    }

    fn consume(&mut self, symbol: char, position: usize) -> Result<(), RunError> {
        let trigger = Trigger::for_input(symbol);
        let key = trigger.key().flatten();
        let Some(transition) = self.table.first_applicable(self.current, key, &self.stack) else {
            let blocked_by_stack = self.table.has_transition(self.current, &trigger);
            debug!(
                "no transition from state {} on '{symbol}' (stack top {:?})",
                self.current,
                self.stack.top()
            );
            return Err(RunError::NoTransition {
                state: self.current,
                symbol,
                position,
                stack_top: self.stack.top().map(str::to_owned),
                blocked_by_stack,
            });
        };

        let step = transition.apply(&mut self.stack);
        trace!("{step}");
        self.current = step.to;
        self.trace.record(step);
        Ok(())
    }

    /// Apply epsilon transitions until none fits, returning how many fired.
    fn close_epsilon(&mut self) -> Result<usize, RunError> {
        let mut moves = 0;
        while let Some(transition) = self.table.first_applicable(self.current, None, &self.stack)
        {
            if moves == self.config.epsilon_limit {
                return Err(RunError::EpsilonLoop {
                    state: self.current,
                    limit: self.config.epsilon_limit,
                });
            }
            let step = transition.apply(&mut self.stack);
            trace!("{step}");
            self.current = step.to;
            self.trace.record(step);
            moves += 1;
        }
        Ok(moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn pda(text: &str) -> Pda {
        let (table, _) = TransitionTable::parse(text).unwrap();
        Pda::new(table)
    }

    #[test]
    fn single_symbol_reaches_accepting_state() {
        let mut machine = pda("1\n0 1 a - ;");
        let report = machine.run("a").unwrap();

        assert_eq!(report.verdict, Verdict::Accepted);
        assert_eq!(report.final_state, StateId(1));
        assert_eq!(report.consumed, 1);
        assert_eq!(machine.current_state(), StateId(1));
    }

    #[test]
    fn unknown_symbol_fails_without_verdict() {
        let mut machine = pda("1\n0 1 a - ;");
        let err = machine.run("b").unwrap_err();

        assert_eq!(
            err,
            RunError::NoTransition {
                state: StateId(0),
                symbol: 'b',
                position: 0,
                stack_top: Some("e".to_string()),
                blocked_by_stack: false,
            }
        );
        assert_eq!(err.state(), StateId(0));
    }

    #[test]
    fn failure_stops_consuming_input() {
        let mut machine = pda("9\n0 1 a - x ;\n1 2 b - y ;");
        let err = machine.run("acb").unwrap_err();

        assert!(matches!(
            err,
            RunError::NoTransition { state: StateId(1), symbol: 'c', position: 1, .. }
        ));
        assert_eq!(machine.trace().len(), 1);
        assert_eq!(machine.stack().as_slice(), &["e", "x"]);
    }

    #[test]
    fn blocked_candidates_are_reported() {
        let mut machine = pda("1\n0 1 a x ;");
        match machine.run("a") {
            Err(RunError::NoTransition {
                blocked_by_stack,
                stack_top,
                ..
            }) => {
                assert!(blocked_by_stack);
                assert_eq!(stack_top.as_deref(), Some("e"));
            }
            other => panic!("expected NoTransition, got {other:?}"),
        }
    }

    #[test]
    fn dash_in_input_fires_dash_rules() {
        let mut machine = pda("1\n0 1 - - ;");
        let report = machine.run("-").unwrap();

        assert_eq!(report.verdict, Verdict::Accepted);
        assert_eq!(report.consumed, 1);
        assert_eq!(report.epsilon_moves, 0);
        assert_eq!(machine.trace().len(), 1);
    }

    #[test]
    fn dash_in_input_is_blocked_like_any_symbol() {
        let mut machine = pda("2\n0 1 a - ;\n1 2 - x ;");
        let err = machine.run("a-").unwrap_err();

        assert_eq!(
            err,
            RunError::NoTransition {
                state: StateId(1),
                symbol: '-',
                position: 1,
                stack_top: Some("e".to_string()),
                blocked_by_stack: true,
            }
        );
    }

    #[test]
    fn epsilon_closure_pops_and_accepts() {
        let mut machine = pda("2\n0 1 a - x ;\n1 2 - x ;");
        let report = machine.run("a").unwrap();

        assert_eq!(report.verdict, Verdict::Accepted);
        assert_eq!(report.epsilon_moves, 1);
        assert_eq!(machine.stack().as_slice(), &["e"]);
        assert_eq!(
            machine.trace().path(),
            vec![StateId(0), StateId(1), StateId(2)]
        );
    }

    #[test]
    fn epsilon_chain_accepts_empty_input() {
        let mut machine = pda("3\n0 1 - - ;\n1 2 - - ;\n2 3 - e ;");
        let report = machine.run("").unwrap();

        assert_eq!(report.verdict, Verdict::Accepted);
        assert_eq!(report.consumed, 0);
        assert_eq!(report.epsilon_moves, 3);
        assert!(machine.stack().is_empty());
    }

    #[test]
    fn ending_outside_accept_state_rejects() {
        let mut machine = pda("5\n0 1 a - ;");
        let report = machine.run("a").unwrap();
        assert_eq!(report.verdict, Verdict::Rejected);
        assert_eq!(report.final_state, StateId(1));
    }

    #[test]
    fn epsilon_cycle_is_bounded() {
        let (table, _) = TransitionTable::parse("9\n0 1 - - ;\n1 0 - - ;").unwrap();
        let config = EngineConfig {
            epsilon_limit: 10,
            ..EngineConfig::default()
        };
        let mut machine = Pda::with_config(table, config);

        let err = machine.run("").unwrap_err();
        assert_eq!(
            err,
            RunError::EpsilonLoop {
                state: StateId(0),
                limit: 10,
            }
        );
        assert_eq!(machine.trace().len(), 10);
    }

    #[test]
    fn growing_epsilon_loop_is_bounded() {
        let mut machine = pda("9\n0 0 - - x ;");
        assert!(matches!(
            machine.run(""),
            Err(RunError::EpsilonLoop { .. })
        ));
    }

    #[test]
    fn limit_allows_exactly_that_many_moves() {
        let (table, _) = TransitionTable::parse("2\n0 1 - - ;\n1 2 - - ;").unwrap();
        let config = EngineConfig {
            epsilon_limit: 2,
            ..EngineConfig::default()
        };
        let mut machine = Pda::with_config(table, config);
        assert_eq!(machine.run("").unwrap().verdict, Verdict::Accepted);
    }

    #[test]
    fn stack_resets_between_runs_by_default() {
        let mut machine = pda("1\n0 1 a - x ;");
        machine.run("a").unwrap();
        machine.run("a").unwrap();
        assert_eq!(machine.stack().as_slice(), &["e", "x"]);
    }

    #[test]
    fn stack_carries_over_when_reset_disabled() {
        let (table, _) = TransitionTable::parse("1\n0 1 a - x ;").unwrap();
        let config = EngineConfig {
            reset_stack_between_runs: false,
            ..EngineConfig::default()
        };
        let mut machine = Pda::with_config(table, config);

        machine.run("a").unwrap();
        let report = machine.run("a").unwrap();
        assert_eq!(report.stack_depth, 3);
        assert_eq!(machine.stack().as_slice(), &["e", "x", "x"]);
    }

    #[test]
    fn state_restarts_every_run() {
        let mut machine = pda("1\n0 1 a - ;\n1 2 a - ;");
        assert_eq!(machine.run("a").unwrap().final_state, StateId(1));
        assert_eq!(machine.run("a").unwrap().final_state, StateId(1));
    }

    #[test]
    fn reset_restores_initial_configuration() {
        let (table, _) = TransitionTable::parse("1\n0 1 a - x ;").unwrap();
        let config = EngineConfig {
            reset_stack_between_runs: false,
            ..EngineConfig::default()
        };
        let mut machine = Pda::with_config(table, config);
        machine.run("a").unwrap();

        machine.reset();
        assert_eq!(machine.current_state(), StateId(0));
        assert_eq!(machine.stack().as_slice(), &["e"]);
        assert!(machine.trace().is_empty());
    }

    #[test]
    fn run_lines_keeps_going_after_failure() {
        let mut machine = pda("1\n0 1 a - ;");
        let outcomes = machine.run_lines(["b", "a", ""]);

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].result.is_err());
        assert_eq!(
            outcomes[1].result.as_ref().map(|r| r.verdict),
            Ok(Verdict::Accepted)
        );
        assert_eq!(
            outcomes[2].result.as_ref().map(|r| r.verdict),
            Ok(Verdict::Rejected)
        );
    }

    #[test]
    fn empty_table_rejects_empty_input() {
        let mut machine = Pda::new(TransitionTable::default());
        assert_eq!(machine.run("").unwrap().verdict, Verdict::Rejected);
        assert!(machine.run("a").is_err());
    }
}
