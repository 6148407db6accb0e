//! Recognized operator member names.

/// .NET operator overload names, without the `op_` prefix.
pub const OPERATOR_WORDS: &[&str] = &[
    // Conversion
    "Implicit",
    "Explicit",
    // Unary
    "Decrement",
    "Increment",
    "CheckedDecrement",
    "CheckedIncrement",
    "UnaryNegation",
    "CheckedUnaryNegation",
    "UnaryPlus",
    "LogicalNot",
    "OnesComplement",
    "True",
    "False",
    "AddressOf",
    "PointerDereference",
    // Arithmetic
    "Addition",
    "CheckedAddition",
    "Subtraction",
    "CheckedSubtraction",
    "Multiply",
    "CheckedMultiply",
    "Division",
    "CheckedDivision",
    "Modulus",
    "Exponent",
    // Bitwise and logical
    "BitwiseAnd",
    "BitwiseOr",
    "ExclusiveOr",
    "LogicalAnd",
    "LogicalOr",
    "LeftShift",
    "RightShift",
    "SignedRightShift",
    "UnsignedRightShift",
    // Equality and comparison
    "Equality",
    "Inequality",
    "LessThan",
    "GreaterThan",
    "LessThanOrEqual",
    "GreaterThanOrEqual",
    // Assignment
    "Assign",
    "AdditionAssignment",
    "SubtractionAssignment",
    "MultiplicationAssignment",
    "DivisionAssignment",
    "ModulusAssignment",
    "BitwiseAndAssignment",
    "BitwiseOrAssignment",
    "ExclusiveOrAssignment",
    "LeftShiftAssignment",
    "RightShiftAssignment",
    "UnsignedRightShiftAssignment",
    "MemberSelection",
    "PointerToMemberSelection",
    "Comma",
];

/// True for `op_implicit`, `op_explicit` and `op_<Word>` from [`OPERATOR_WORDS`].
pub fn is_operator_name(member: &str) -> bool {
    if matches!(member, "op_implicit" | "op_explicit") {
        return true;
    }
    member
        .strip_prefix("op_")
        .is_some_and(|word| OPERATOR_WORDS.contains(&word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_operators() {
        assert!(is_operator_name("op_implicit"));
        assert!(is_operator_name("op_Explicit"));
        assert!(is_operator_name("op_LessThanOrEqual"));
        assert!(is_operator_name("op_True"));
        assert!(is_operator_name("op_False"));
    }

    #[test]
    fn test_rejected_operators() {
        assert!(!is_operator_name("operator =="));
        assert!(!is_operator_name("op_"));
        assert!(!is_operator_name("op_Spaceship"));
        assert!(!is_operator_name("op_lessthan"));
        assert!(!is_operator_name("ValidOperator"));
    }
}
