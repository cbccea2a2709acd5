//! Property-based tests for the calculator core and engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated command sequences.

use chrono::{TimeZone, Utc};
use dentaku::core::{CalculatorState, Command, HistoryEntry, Operation, Rules};
use dentaku::engine::Calculator;
use dentaku::storage::{HistoryStore, KeyedHistoryStore, MemoryStore};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_digit()(digit in 0..=9u8) -> Command {
        Command::Digit(digit)
    }
}

prop_compose! {
    fn arbitrary_operation()(variant in 0..5usize) -> Operation {
        Operation::ALL[variant]
    }
}

fn arbitrary_entry_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => arbitrary_digit(),
        1 => Just(Command::DecimalPoint),
    ]
}

fn arbitrary_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        6 => arbitrary_digit(),
        1 => Just(Command::DecimalPoint),
        2 => arbitrary_operation().prop_map(Command::Operator),
        1 => Just(Command::Equals),
        1 => Just(Command::Backspace),
        1 => Just(Command::Clear),
    ]
}

prop_compose! {
    fn arbitrary_operand()(digits in prop::collection::vec(0..=9u8, 1..6)) -> Vec<Command> {
        digits.into_iter().map(Command::Digit).collect()
    }
}

fn run(commands: &[Command]) -> CalculatorState {
    let rules = Rules::default();
    commands
        .iter()
        .fold(CalculatorState::new(), |state, &command| rules.apply(&state, command).state)
}

fn has_redundant_leading_zero(input: &str) -> bool {
    let unsigned = input.strip_prefix('-').unwrap_or(input);
    let mut chars = unsigned.chars();
    chars.next() == Some('0') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

proptest! {
    #[test]
    fn digits_never_leave_redundant_leading_zero(
        first in arbitrary_digit(),
        rest in prop::collection::vec(arbitrary_entry_command(), 0..20)
    ) {
        let mut commands = vec![first];
        commands.extend(rest);

        let rules = Rules::default();
        let mut state = CalculatorState::new();
        for command in commands {
            state = rules.apply(&state, command).state;
            prop_assert!(!has_redundant_leading_zero(&state.current_input), "{}", state.current_input);
        }
    }

    #[test]
    fn at_most_one_decimal_point(commands in prop::collection::vec(arbitrary_entry_command(), 0..30)) {
        let state = run(&commands);
        prop_assert!(state.current_input.matches('.').count() <= 1);
    }

    #[test]
    fn any_sequence_keeps_one_decimal_point_and_non_empty_input(
        commands in prop::collection::vec(arbitrary_command(), 0..40)
    ) {
        let rules = Rules::default();
        let mut state = CalculatorState::new();
        for command in commands {
            state = rules.apply(&state, command).state;
            prop_assert!(!state.current_input.is_empty());
            prop_assert!(state.current_input.matches('.').count() <= 1);
        }
    }

    #[test]
    fn repeated_equals_is_a_no_op(
        lhs in arbitrary_operand(),
        op in arbitrary_operation(),
        rhs in arbitrary_operand(),
        repeats in 1..5usize
    ) {
        let mut calculator = Calculator::new();
        for command in lhs {
            calculator.handle(command);
        }
        calculator.handle(Command::Operator(op));
        for command in rhs {
            calculator.handle(command);
        }
        calculator.handle(Command::Equals);

        let after_first = calculator.state().clone();
        let entries = calculator.history().len();
        for _ in 0..repeats {
            calculator.handle(Command::Equals);
        }

        prop_assert_eq!(calculator.state(), &after_first);
        prop_assert_eq!(calculator.history().len(), entries);
    }

    #[test]
    fn division_by_zero_preserves_operands(lhs in arbitrary_operand(), zeros in 1..4usize) {
        let mut calculator = Calculator::new();
        for command in lhs {
            calculator.handle(command);
        }
        let dividend = calculator.state().current_input.clone();

        calculator.handle(Command::Operator(Operation::Divide));
        for _ in 0..zeros {
            calculator.handle(Command::Digit(0));
        }
        calculator.handle(Command::Equals);

        prop_assert_eq!(&calculator.state().previous_input, &dividend);
        prop_assert_eq!(calculator.state().pending_operation, Some(Operation::Divide));
        prop_assert!(calculator.state().error.is_some());
        prop_assert!(calculator.history().is_empty());
    }

    #[test]
    fn every_calculation_adds_exactly_one_entry(
        commands in prop::collection::vec(arbitrary_command(), 0..40)
    ) {
        let rules = Rules::default();
        let mut state = CalculatorState::new();
        let mut expected = 0;
        let mut calculator = Calculator::new();

        for command in commands {
            let step = rules.apply(&state, command);
            expected += usize::from(step.completed.is_some());
            state = step.state;
            calculator.handle(command);
        }

        prop_assert_eq!(calculator.history().len(), expected);
        prop_assert_eq!(calculator.state(), &state);
    }

    #[test]
    fn modulo_sign_follows_dividend(lhs in -1e6f64..1e6, rhs in 1f64..1e3) {
        let remainder = Operation::Modulo.apply(lhs, rhs);
        prop_assert!(remainder == 0.0 || remainder.signum() == lhs.signum());
        prop_assert!(remainder.abs() < rhs);
    }

    #[test]
    fn history_roundtrip_through_storage(
        records in prop::collection::vec(("[ -~×÷−]{0,16}", "[0-9.e+-]{1,12}", 0i64..4_102_444_800_000), 0..8)
    ) {
        let entries: Vec<HistoryEntry> = records
            .into_iter()
            .map(|(expression, result, millis)| {
                HistoryEntry::new(expression, result, Utc.timestamp_millis_opt(millis).unwrap())
            })
            .collect();

        let backend = MemoryStore::new();
        let mut store = KeyedHistoryStore::with_default_key(backend.clone());
        store.save(&entries).unwrap();

        let reloaded = KeyedHistoryStore::with_default_key(backend).load().unwrap();
        prop_assert_eq!(reloaded, entries);
    }
}
