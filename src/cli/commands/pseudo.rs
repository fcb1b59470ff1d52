use super::super::args::PseudoCommand;
use super::{CommandKind, CommandResult, CommandSummary, PseudoSummary};
use crate::core::pseudolocalize;

pub fn pseudo(cmd: PseudoCommand) -> CommandResult {
    let lines = cmd.text.iter().map(|text| pseudolocalize(text)).collect();

    CommandResult {
        kind: CommandKind::Pseudo,
        summary: CommandSummary::Pseudo(PseudoSummary { lines }),
        error_count: 0,
        exit_on_errors: false,
    }
}
