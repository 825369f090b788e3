// parser/positional.rs: Move leading positional arguments into options that
// declare a bind index (`#1`, `#2`, ...).
//
// Runs once per cycle, after the command line and before the config file, so
// config-derived positionals are never bound.

use crate::error::{ErrorKind, ErrorState, Result};
use crate::option::OptionDef;
use crate::registry::OptionRegistry;
use crate::store::ArgumentStore;

use super::tokenizer::save_value;

pub fn move_arguments(
    registry: &OptionRegistry,
    store: &mut ArgumentStore,
    errors: &mut ErrorState,
) -> Result<()> {
    if store.positionals().is_empty() {
        return Ok(());
    }

    let size = store.positionals().len().min(registry.len());
    let mut slots: Vec<Option<&OptionDef>> = vec![None; size];
    let mut max_index = 0usize;

    for def in registry {
        if def.bind_index == 0 {
            continue;
        }
        let index = def.bind_index;
        if index > 0 && index as usize <= size {
            let slot = &mut slots[index as usize - 1];
            if slot.is_some() {
                errors.raise(
                    ErrorKind::PositionBind,
                    format!("redefined of {}#{}", def.long, index),
                )?;
            }
            *slot = Some(def);
            max_index = max_index.max(index as usize);
        } else {
            errors.raise(
                ErrorKind::PositionBind,
                format!("beyond range of {}#{}", def.long, index),
            )?;
        }
    }

    // Bound indices must be contiguous from #1.
    if let Some(gap) = (1..max_index).find(|&i| slots[i - 1].is_none()) {
        errors.raise(ErrorKind::PositionBind, format!("no preposition bound index #{}", gap))?;
    }

    let mut moved = 0usize;
    for def in slots.iter() {
        let Some(def) = def else { break };
        if store.contains(&def.long) {
            break;
        }
        let value = store.positionals()[moved].clone();
        save_value(store, def, &value);
        moved += 1;
    }

    if moved > 0 {
        crate::displaylevel!(4, "cliop: bound {} positional argument(s)\n", moved);
        store.drain_positionals(moved);
    }
    Ok(())
}
