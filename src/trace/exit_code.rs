//! TVM exit codes and their symbolic names
//!
//! <https://docs.ton.org/v3/documentation/tvm/tvm-exit-codes>

static EXIT_CODES: &[(i64, &str)] = &[
    (0, "standard_successful_execution"),
    (1, "alternative_successful_execution_reserved"),
    (2, "stack_underflow"),
    (3, "stack_overflow"),
    (4, "integer_overflow"),
    (5, "range_check_error"),
    (6, "invalid_tvm_opcode"),
    (7, "type_check_error"),
    (8, "cell_overflow"),
    (9, "cell_underflow"),
    (10, "dictionary_error"),
    (11, "unknown_error"),
    (12, "fatal_error"),
    (13, "out_of_gas"),
    (-14, "out_of_gas"),
    (14, "vm_virtualization_error"),
    (32, "action_list_invalid"),
    (33, "action_list_too_long"),
    (34, "action_invalid_or_not_supported"),
    (35, "invalid_source_address"),
    (36, "invalid_destination_address"),
    (37, "not_enough_toncoin"),
    (38, "not_enough_extra_currencies"),
    (39, "outbound_message_does_not_fit"),
    (40, "cannot_process_message"),
    (41, "library_reference_null"),
    (42, "library_change_error"),
    (43, "exceeded_max_cells_or_depth"),
    (50, "account_state_size_exceeded"),
    (128, "null_reference_exception"),
    (129, "invalid_serialization_prefix"),
    (130, "invalid_incoming_message"),
    (131, "constraints_error"),
    (132, "access_denied"),
    (133, "contract_stopped"),
    (134, "invalid_argument"),
    (135, "contract_code_not_found"),
    (136, "invalid_standard_address"),
    (137, "masterchain_support_not_enabled"),
    (138, "not_a_basechain_address"),
];

/// Symbolic name of a known exit code
pub fn name(code: i64) -> Option<&'static str> {
    EXIT_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}

/// Translates an exit code into an error tag.
///
/// Unknown codes become `unknown_exit_code_<code>`, a missing code stays missing.
pub fn translate(code: Option<i64>) -> Option<String> {
    let code = code?;
    Some(match name(code) {
        Some(name) => name.to_string(),
        None => format!("unknown_exit_code_{}", code),
    })
}
