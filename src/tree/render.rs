//! Rule-style rendering of a [`Tree`].
//!
//! Every root-to-leaf path becomes one line:
//! `IF outlook IS Sunny AND humidity IS High THAN play No`.
//! The structural dump lives in the `Display` implementation of `Tree`.
use crate::constants::{RULE_AND, RULE_IF, RULE_IS, RULE_THEN};
use crate::tree::tree::Tree;
use std::fmt;

/// Collect one rule per path of `tree`.
///
/// * `tree` - The root returned by the tree builder. The root itself is
///   not a test and never appears in a rule.
/// * `class_header` - Name of the class column, used to tell class leaves
///   apart from branches that could not be split.
pub fn rules(tree: &Tree, class_header: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut conditions = Vec::new();
    collect_rules(tree, class_header, &mut conditions, &mut out);
    out
}

/// Write every rule of `tree` to `w`, one per line.
pub fn write_rules<W: fmt::Write>(w: &mut W, tree: &Tree, class_header: &str) -> fmt::Result {
    for rule in rules(tree, class_header) {
        writeln!(w, "{}", rule)?;
    }
    Ok(())
}

fn collect_rules<'a>(node: &'a Tree, class_header: &str, conditions: &mut Vec<&'a Tree>, out: &mut Vec<String>) {
    for child in node.children() {
        if child.is_class_leaf(class_header) {
            out.push(format_rule(conditions, Some(child)));
        } else if child.is_pure() {
            conditions.push(child);
            out.push(format_rule(conditions, None));
            conditions.pop();
        } else {
            conditions.push(child);
            collect_rules(child, class_header, conditions, out);
            conditions.pop();
        }
    }
}

fn format_rule(conditions: &[&Tree], leaf: Option<&Tree>) -> String {
    let tests: Vec<String> = conditions
        .iter()
        .map(|c| format!("{} {} {}", c.name(), RULE_IS, c.value()))
        .collect();
    let mut rule = String::new();
    if !tests.is_empty() {
        rule.push_str(RULE_IF);
        rule.push(' ');
        rule.push_str(&tests.join(&format!(" {} ", RULE_AND)));
    }
    if let Some(leaf) = leaf {
        if !rule.is_empty() {
            rule.push(' ');
        }
        rule.push_str(&format!("{} {} {}", RULE_THEN, leaf.name(), leaf.value()));
    }
    rule
}
