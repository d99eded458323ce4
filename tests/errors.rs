#[macro_use]
mod cases;

test_case!(
    division_by_zero,
    input: "/ 1 0",
    result: "Error: Division by Zero!",
);

test_case!(
    remainder_by_zero,
    input: "% 5 (- 2 2)",
    result: "Error: Division by Zero!",
);

test_case!(
    invalid_operator,
    input: "$ 1 2",
    read: "($ 1 2)",
    result: "Error: Invalid Operator!",
);

test_case!(
    invalid_operator_glued,
    input: "+* 1 2",
    result: "Error: Invalid Operator!",
);

test_case!(
    invalid_operator_nested,
    input: "* 2 (& 1 1)",
    result: "Error: Invalid Operator!",
);

test_case!(
    invalid_number,
    input: "+ 1 99999999999999999999",
    read: "(+ 1 Error: Invalid Number!)",
    result: "Error: Invalid Number!",
);

test_case!(
    overflow,
    input: "* 9223372036854775807 2",
    result: "Error: Integer Overflow!",
);

test_case!(
    negating_min_overflows,
    input: "- -9223372036854775808",
    result: "Error: Integer Overflow!",
);
// The first error found wins

test_case!(
    left_error_wins,
    input: "+ (/ 1 0) (* 9 9)",
    result: "Error: Division by Zero!",
);

test_case!(
    left_error_wins_over_right_error,
    input: "+ ($ 1 1) (/ 1 0)",
    result: "Error: Invalid Operator!",
);

test_case!(
    error_stops_the_fold,
    input: "/ 8 0 (% 1 0)",
    result: "Error: Division by Zero!",
);

test_case!(
    letters,
    input: "abc",
    parse_error: "Parse error at line 1, column 1: expected operator",
);

test_case!(
    empty_line,
    input: "",
    parse_error: "Parse error at line 1, column 1: expected operator",
);

test_case!(
    operator_only,
    input: "+",
    parse_error: "Parse error at line 1, column 2: expected ",
);

test_case!(
    unclosed_paren,
    input: "+ 1 (* 2 3",
    parse_error: "Parse error at line 1, column 11: expected ",
);

test_case!(
    empty_parens,
    input: "+ 1 ()",
    parse_error: "Parse error at line 1, column 6: expected operator",
);
// Operands are checked before the operator

test_case!(
    operand_error_beats_unknown_operator,
    input: "$ (/ 1 0) 1",
    result: "Error: Division by Zero!",
);

test_case!(
    argument_error_beats_unknown_operator,
    input: "$ 1 (/ 1 0)",
    result: "Error: Division by Zero!",
);

test_case!(
    unknown_operator_with_one_argument,
    input: "$ 7",
    result: "7",
);
