use crate::query::predicate::Predicate;

///
/// Normalize a predicate into a canonical, flattened form.
///
/// - nested `And` / `Or` are flattened into their parent
/// - identity children (`True` in `And`, `False` in `Or`) are dropped
/// - absorbing children short-circuit the whole group
/// - single-child groups collapse to the child
/// - double negation is removed
///
/// Normalization never changes evaluation results.
///
#[must_use]
pub fn normalize(predicate: &Predicate) -> Predicate {
    match predicate {
        Predicate::And(children) => normalize_group(children, true),
        Predicate::Or(children) => normalize_group(children, false),
        Predicate::Not(inner) => match normalize(inner) {
            Predicate::Not(twice) => *twice,
            Predicate::True => Predicate::False,
            Predicate::False => Predicate::True,
            other => Predicate::not(other),
        },
        other => other.clone(),
    }
}

// `conjunction` selects And (true) or Or (false) semantics.
fn normalize_group(children: &[Predicate], conjunction: bool) -> Predicate {
    let (identity, absorbing) = if conjunction {
        (Predicate::True, Predicate::False)
    } else {
        (Predicate::False, Predicate::True)
    };

    let mut out = Vec::with_capacity(children.len());
    for child in children {
        match normalize(child) {
            c if c == identity => {}
            c if c == absorbing => return absorbing,
            Predicate::And(grand) if conjunction => out.extend(grand),
            Predicate::Or(grand) if !conjunction => out.extend(grand),
            c => out.push(c),
        }
    }

    match out.len() {
        0 => identity,
        1 => out.remove(0),
        _ if conjunction => Predicate::And(out),
        _ => Predicate::Or(out),
    }
}
