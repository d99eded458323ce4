#[macro_use]
mod cases;

test_case!(
    simple_addition,
    input: "+ 1 2",
    read: "(+ 1 2)",
    result: "3",
);

test_case!(
    nested_form,
    input: "+ 1 (* 2 3)",
    read: "(+ 1 (* 2 3))",
    result: "7",
);

test_case!(
    power,
    input: "^ 2 3",
    result: "8",
);
// Power folds left: (2^3)^2

test_case!(
    power_fold,
    input: "^ 2 3 2",
    result: "64",
);

test_case!(
    negative_exponent_truncates,
    input: "^ 2 -1",
    result: "0",
);

test_case!(
    subtraction_fold,
    input: "- 100 1 2 3",
    result: "94",
);

test_case!(
    division_truncates_toward_zero,
    input: "/ -7 2",
    result: "-3",
);

test_case!(
    remainder_takes_sign_of_dividend,
    input: "% -7 2",
    result: "-1",
);

test_case!(
    unary_minus,
    input: "- 5",
    read: "(- 5)",
    result: "-5",
);

test_case!(
    unary_plus_is_identity,
    input: "+ (- 3)",
    result: "-3",
);

test_case!(
    deep_nesting,
    input: "* (+ 1 (- 6 (/ 20 (% 9 5)))) (^ 2 2)",
    result: "8",
);

test_case!(
    whitespace_is_ignored,
    input: "  +\t1   ( *  2\t3 )  ",
    read: "(+ 1 (* 2 3))",
    result: "7",
);

test_case!(
    leading_zeros,
    input: "+ 007 -003",
    read: "(+ 7 -3)",
    result: "4",
);

test_case!(
    i64_extremes,
    input: "+ 9223372036854775807 -9223372036854775808",
    result: "-1",
);
