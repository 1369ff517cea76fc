//! Property tests for cart state transitions.
//!
//! Random add/remove sequences are replayed against a plain (id, quantity)
//! reference model implementing the cart rules directly; the real cart must
//! agree line for line, in order, and on the total.

use carrinho_core::{Cart, Catalog, Price};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Add(u32),
    Remove(u32),
}

// Ids 0 and 5..8 are not in the built-in catalog, so both no-op paths get
// exercised alongside the happy ones.
fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u32..8).prop_map(Op::Add),
        (0u32..8).prop_map(Op::Remove),
    ]
}

fn reference_replay(catalog: &Catalog, ops: &[Op]) -> Vec<(u32, u32)> {
    let mut model: Vec<(u32, u32)> = Vec::new();
    for op in ops {
        match *op {
            Op::Add(id) => {
                if catalog.get(id).is_none() {
                    continue;
                }
                if let Some(entry) = model.iter_mut().find(|entry| entry.0 == id) {
                    entry.1 += 1;
                } else {
                    model.push((id, 1));
                }
            }
            Op::Remove(id) => model.retain(|entry| entry.0 != id),
        }
    }
    model
}

proptest! {
    #[test]
    fn cart_matches_reference_model(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let catalog = Catalog::builtin();
        let mut cart = Cart::default();
        for op in &ops {
            match *op {
                Op::Add(id) => { cart.add(&catalog, id); }
                Op::Remove(id) => { cart.remove(id); }
            }
        }

        let got: Vec<(u32, u32)> = cart
            .lines()
            .iter()
            .map(|line| (line.item.id, line.quantity))
            .collect();
        prop_assert_eq!(got, reference_replay(&catalog, &ops));
    }

    #[test]
    fn invariants_hold_after_any_sequence(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let catalog = Catalog::builtin();
        let mut cart = Cart::default();
        for op in &ops {
            match *op {
                Op::Add(id) => { cart.add(&catalog, id); }
                Op::Remove(id) => { cart.remove(id); }
            }
        }

        // ids unique, every line backed by the catalog, quantity >= 1
        let mut seen = std::collections::HashSet::new();
        for line in cart.lines() {
            prop_assert!(seen.insert(line.item.id));
            prop_assert!(catalog.get(line.item.id).is_some());
            prop_assert!(line.quantity >= 1);
        }

        // total is the fold of unit price times quantity
        let expected: Price = cart.lines().iter().map(|l| l.item.price.times(l.quantity)).sum();
        prop_assert_eq!(cart.total(), expected);
    }

    #[test]
    fn remove_never_disturbs_other_lines(id in 1u32..=4, extra in 1u32..=4) {
        let catalog = Catalog::builtin();
        let mut cart = Cart::default();
        for i in 1..=4 {
            cart.add(&catalog, i);
        }
        cart.add(&catalog, extra);

        let before: Vec<u32> = cart.lines().iter().map(|l| l.item.id).collect();
        cart.remove(id);
        let after: Vec<u32> = cart.lines().iter().map(|l| l.item.id).collect();

        let expected: Vec<u32> = before.into_iter().filter(|&x| x != id).collect();
        prop_assert_eq!(after, expected);
    }
}
