//! Human-readable names for the instructions this client sends, used when a transaction fails.

use std::fmt::{
    self,
    Debug,
    Display,
    Formatter,
};

use colored::Colorize;
use quotient_interface::{
    instructions::DivideInstructionData,
    pack::Unpack,
};
use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_instruction::Instruction;
use solana_system_interface::instruction::SystemInstruction;

use crate::{
    logs::LogColor,
    COMPUTE_BUDGET_ID,
    SYSTEM_PROGRAM_ID,
};

/// Displays an instruction as `Program::InstructionName`.
pub struct PrettyInstruction<'a>(pub &'a Instruction);

impl Display for PrettyInstruction<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let instruction = self.0;
        let (program_name, instruction_name) = match instruction.program_id {
            SYSTEM_PROGRAM_ID => (
                "SystemProgram".to_string(),
                bincode::deserialize::<SystemInstruction>(&instruction.data)
                    .map(|ixn| enum_name(&ixn))
                    .unwrap_or_else(|_| "UnknownInstruction".into()),
            ),
            COMPUTE_BUDGET_ID => (
                "ComputeBudget".to_string(),
                borsh::from_slice::<ComputeBudgetInstruction>(&instruction.data)
                    .map(|ixn| enum_name(&ixn))
                    .unwrap_or_else(|_| "UnknownInstruction".into()),
            ),
            program_id => (
                program_id.to_string(),
                // Every other instruction this client sends goes to the quotient program.
                DivideInstructionData::unpack(&instruction.data)
                    .map(|data| format!("Divide({}, {})", data.numerator, data.denominator))
                    .unwrap_or_else(|_| "UnknownInstruction".into()),
            ),
        };

        let colored_name = program_name.color(LogColor::Debug);
        write!(f, "{colored_name}::{instruction_name}")
    }
}

// This should only be used with enums. It assumes that `Debug` will print the value like `Ident {`.
fn enum_name<T: Debug>(value: &T) -> String {
    let s = format!("{:?}", value);
    s.split_once([' ', '{', '('])
        .map(|(n, _)| n)
        .unwrap_or(&s)
        .into()
}

#[cfg(test)]
mod tests {
    use quotient_interface::instructions::divide;
    use solana_sdk::pubkey::Pubkey;
    use solana_system_interface::instruction::create_account_with_seed;

    use super::*;

    #[test]
    fn names_known_instructions() {
        colored::control::set_override(false);

        let payer = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let create = create_account_with_seed(
            &payer,
            &Pubkey::new_unique(),
            &payer,
            "app",
            1,
            4,
            &program_id,
        );
        assert_eq!(
            PrettyInstruction(&create).to_string(),
            "SystemProgram::CreateAccountWithSeed"
        );

        let budget = ComputeBudgetInstruction::set_compute_unit_limit(10);
        assert_eq!(
            PrettyInstruction(&budget).to_string(),
            "ComputeBudget::SetComputeUnitLimit"
        );

        let run = divide(&program_id, &Pubkey::new_unique(), 15, 5);
        assert_eq!(
            PrettyInstruction(&run).to_string(),
            format!("{program_id}::Divide(15, 5)")
        );
    }
}
