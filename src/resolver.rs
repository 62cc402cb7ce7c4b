use crate::action::{ActionSet, ParamAction, SetValue, Value};
use crate::compat::{String, ToString, Vec};
use crate::param::Param;

/// Apply an action set to an ordered parameter list.
///
/// Parts are applied in [`ParamAction::RESOLVE_ORDER`]:
/// 1. `set` expands into the list of new parameters, in key-declaration order
/// 2. `toggle` appends to the new parameters, or strips every occurrence of a
///    key whose first occurrence already holds the toggled value
/// 3. `remove` strips every occurrence of each key
///
/// The result keeps each untouched previous parameter in its original position,
/// drops any previous parameter whose key appears among the new ones, and
/// appends the new parameters. `prev_params` is never modified.
pub fn resolve_url_params(prev_params: &[Param], actions: &ActionSet) -> Vec<Param> {
    let mut params = prev_params.to_vec();
    let mut next = Vec::new();

    for action in ParamAction::RESOLVE_ORDER {
        match action {
            ParamAction::Set => {
                if let Some(set) = &actions.set {
                    expand_set(&mut next, set);
                }
            }
            ParamAction::Toggle => {
                if let Some(toggle) = &actions.toggle {
                    apply_toggle(&mut params, &mut next, toggle);
                }
            }
            ParamAction::Remove => {
                if let Some(remove) = &actions.remove {
                    params.retain(|param| !remove.contains(&param.key));
                }
            }
        }
    }

    params.retain(|param| !next.iter().any(|added| added.key == param.key));
    tracing::trace!(
        kept = params.len(),
        added = next.len(),
        "resolved query parameters"
    );
    params.extend(next);
    params
}

fn expand_set(next: &mut Vec<Param>, set: &[(String, SetValue)]) {
    for (key, value) in set {
        next.extend(
            value
                .values()
                .iter()
                .map(|value| Param::new(key.clone(), value.to_string())),
        );
    }
}

fn apply_toggle(params: &mut Vec<Param>, next: &mut Vec<Param>, toggle: &[(String, Value)]) {
    for (key, value) in toggle {
        let matches = params
            .iter()
            .find(|param| param.key == *key)
            .and_then(|param| param.value.as_deref())
            .is_some_and(|stored| value.loosely_eq(stored));

        if matches {
            tracing::trace!(key = %key, "toggled off");
            params.retain(|param| param.key != *key);
        } else {
            tracing::trace!(key = %key, value = %value, "toggled on");
            next.push(Param::new(key.clone(), value.to_string()));
        }
    }
}
