//! Property tests: random scripts of operations, checked against a naive model.
use super::{init_logging, prio};
use num::FromPrimitive;
use priority_collection::{Id, Priority, PriorityCollection};
use quickcheck::{Arbitrary, Gen};
use std::fmt::Debug;
use std::rc::Rc;
use std::vec::Vec;

const MAX_DECISIONS: usize = 2000;

#[derive(Debug, Clone, Copy)]
pub enum Decision {
    Add,
    /// Promote the `i`-th live object, in insertion order.
    Promote(usize),
    Pop,
}

#[derive(Clone)]
pub struct Decisions {
    len: usize,
    decisions: Rc<Vec<Decision>>,
}

impl Debug for Decisions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decisions")
            .field("len", &self.len)
            .field("decisions", &self.decisions.as_slice()[..self.len].iter())
            .finish()
    }
}

impl Decisions {
    fn as_slice(&self) -> &[Decision] {
        &self.decisions.as_slice()[..self.len]
    }
}

impl Arbitrary for Decisions {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut ds = vec![];
        let mut live: usize = 0;
        let n: usize = usize::arbitrary(g) % MAX_DECISIONS;
        for _ in 0..n {
            let d = match u8::arbitrary(g) % 4 {
                _ if live == 0 => Decision::Add,
                0 => Decision::Add,
                1 => Decision::Pop,
                _ => Decision::Promote(usize::arbitrary(g) % live),
            };
            match d {
                Decision::Add => live += 1,
                Decision::Pop => live -= 1,
                Decision::Promote(_) => (),
            }
            ds.push(d);
        }
        Decisions {
            len: ds.len(),
            decisions: Rc::new(ds),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let mut lens = Vec::new();

        // Bisect decision history; every prefix of a valid script is valid.
        let mut len = self.len / 2;
        while 0 < len && len < self.len - 1 {
            lens.push(Decisions {
                len,
                decisions: self.decisions.clone(),
            });
            len += (self.len - len) / 2;
        }

        if self.len > 1 {
            lens.push(Decisions {
                len: self.len - 1,
                decisions: self.decisions.clone(),
            })
        }

        Box::new(lens.into_iter())
    }
}

/// Reference behaviour: live objects as `(priority, id)` pairs, in insertion order.
#[derive(Debug, Default)]
struct Model {
    live: Vec<(usize, Id)>,
    popped: Vec<Id>,
    count: usize,
}

impl Model {
    fn max(&self) -> Option<(usize, Id)> {
        self.live.iter().copied().max()
    }
}

/// Replay `ds` on both a collection and the model, reporting the first divergence.
pub fn run_and_check<P: Priority + FromPrimitive>(ds: Decisions) -> bool {
    init_logging();
    let mut c: PriorityCollection<String, P> = PriorityCollection::new();
    let mut m = Model::default();

    for (step, &d) in ds.as_slice().iter().enumerate() {
        let ok = match d {
            Decision::Add => {
                let id = c.add(format!("object {}", m.count));
                let ok = id == Id::from(m.count)
                    && c.is_valid(id)
                    && c.priority(id) == Some(prio(0));
                m.live.push((0, id));
                m.count += 1;
                ok
            }
            Decision::Promote(i) => {
                let (priority, id) = &mut m.live[i];
                *priority += 1;
                c.try_promote(*id) == Ok(prio(*priority))
            }
            Decision::Pop => {
                let (priority, id) = m.max().expect("scripts never pop an empty model");
                m.live.retain(|&(_, live)| live != id);
                m.popped.push(id);
                let peeked = c.get_max();
                let peeked = (peeked.0.clone(), peeked.1);
                let popped = c.pop_max();
                let expected = (format!("object {}", id.index()), prio(priority));
                peeked == expected && popped == expected
            }
        };

        let expected_max = m.max().map(|(p, id)| (c.get(id).clone(), prio(p)));
        let actual_max = c.try_get_max().ok().map(|(v, p)| (v.clone(), p));
        let consistent = c.len() == m.live.len()
            && c.count() == m.count
            && m.popped.iter().all(|&id| !c.is_valid(id))
            && expected_max == actual_max;

        if !(ok && consistent) {
            println!("Error: diverged from model at step {step}: {d:?}");
            println!("Model: {m:?}");
            return false;
        }
    }
    true
}
