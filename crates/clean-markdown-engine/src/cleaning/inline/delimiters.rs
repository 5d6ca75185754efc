use std::collections::HashMap;

use super::types::InlineNode;

/// Pairs emphasis delimiter runs, returning a matched flag per node.
///
/// Openers wait on a stack of node indices. A closer pairs with the nearest
/// opener of the same character and exactly the same run length; openers
/// above it are discarded and stay literal. After a closer fails, the stack
/// height is remembered per (character, length) so later closers of the
/// same shape never rescan those openers. Link text is its own scope:
/// openers outside a link never pair with closers inside it.
pub fn match_delimiters(nodes: &[InlineNode]) -> Vec<bool> {
    let mut matched = vec![false; nodes.len()];
    let mut stack: Vec<usize> = vec![];
    let mut bottoms: HashMap<(u8, usize), usize> = HashMap::new();
    // Stack heights at each open link; emphasis never pairs across them.
    let mut links: Vec<usize> = vec![];

    for (i, node) in nodes.iter().enumerate() {
        let (full, ch, can_open, can_close) = match *node {
            InlineNode::Delim {
                full,
                ch,
                can_open,
                can_close,
            } => (full, ch, can_open, can_close),
            InlineNode::LinkOpen { .. } => {
                links.push(stack.len());
                continue;
            }
            InlineNode::LinkClose { .. } => {
                if let Some(height) = links.pop() {
                    stack.truncate(height);
                    for b in bottoms.values_mut() {
                        *b = (*b).min(height);
                    }
                }
                continue;
            }
            _ => continue,
        };

        if can_close {
            let key = (ch, full.len());
            let floor = links.last().copied().unwrap_or(0);
            let bottom = bottoms
                .get(&key)
                .copied()
                .unwrap_or(0)
                .max(floor)
                .min(stack.len());
            let found = stack[bottom..]
                .iter()
                .rposition(|&j| same_shape(&nodes[j], key))
                .map(|p| p + bottom);

            if let Some(pos) = found {
                matched[stack[pos]] = true;
                matched[i] = true;
                stack.truncate(pos);
                for b in bottoms.values_mut() {
                    *b = (*b).min(pos);
                }
                continue;
            }
            bottoms.insert(key, stack.len());
        }

        if can_open {
            stack.push(i);
        }
    }

    matched
}

fn same_shape(node: &InlineNode, (ch, len): (u8, usize)) -> bool {
    matches!(node, InlineNode::Delim { full, ch: c, .. } if *c == ch && full.len() == len)
}
