use priority_collection::naive::ScanIndex;
use priority_collection::{Id, PriorityCollection, PriorityIndex, Rank};
use quickcheck::{Arbitrary, Gen};

const MAX_DECISIONS: usize = 300;
const MAX_RANGE: usize = 8;

#[derive(Debug, Clone, Copy)]
pub enum Decision {
    Add,
    AddRange(usize),
    /// Identifier to promote, taken modulo the number of identifiers issued so far.
    Promote(usize),
    PopMax,
}

#[derive(Clone, Debug)]
pub struct Decisions(pub Vec<Decision>);

impl Arbitrary for Decisions {
    fn arbitrary(g: &mut Gen) -> Self {
        let n: usize = usize::arbitrary(g) % MAX_DECISIONS;
        let ds = (0..n)
            .map(|_| match u8::arbitrary(g) % 10 {
                0..=2 => Decision::Add,
                3 => Decision::AddRange(usize::arbitrary(g) % MAX_RANGE),
                4..=7 => Decision::Promote(usize::arbitrary(g)),
                _ => Decision::PopMax,
            })
            .collect();
        Decisions(ds)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Only shrinks to prefixes of the decision history.
        let ds = self.0.clone();
        let len = ds.len();
        let mut lens: Vec<usize> = (1..usize::BITS)
            .map(|pow| len - (len >> pow))
            .take_while(|&l| l < len)
            .collect();
        if len > 0 {
            lens.insert(0, 0);
            lens.push(len - 1);
        }
        lens.dedup();
        Box::new(lens.into_iter().map(move |l| Decisions(ds[..l].to_vec())))
    }
}

/// Whether the element table, liveness and priority index of `c` are consistent.
pub fn invariants_hold<T, P: Rank, I: PriorityIndex<P>>(c: &PriorityCollection<T, P, I>) -> bool {
    let ids = || (0..c.issued()).map(Id::from);
    let live = ids().filter(|&id| c.is_valid(id)).count();

    if live != c.len() || live != c.priority_index().len() {
        println!("{live} live identifiers, index holds {}", c.priority_index().len());
        return false;
    }
    for id in ids() {
        let consistent = match c.priority(id) {
            Some(p) => c.is_valid(id) && c.priority_index().contains(p, id),
            None => !c.is_valid(id),
        };
        if !consistent {
            println!("{id} disagrees with the index");
            return false;
        }
    }
    !c.is_valid(Id::from(c.issued()))
}

/// Replay `ds` against a collection using `I` and one using [`ScanIndex`]; they must agree at
/// every step.
pub fn qc_agrees_common<I: PriorityIndex<u64>>(ds: Decisions) -> bool {
    let mut subject = PriorityCollection::<usize, u64, I>::new();
    let mut reference = PriorityCollection::<usize, u64, ScanIndex<u64>>::new();
    let mut next = 0;

    for (step, &d) in ds.0.iter().enumerate() {
        let agree = match d {
            Decision::Add => {
                next += 1;
                subject.add(next) == reference.add(next)
            }
            Decision::AddRange(n) => {
                let values = next..next + n;
                next += n;
                let mut ids = vec![];
                subject.add_range(values.clone(), &mut ids);
                ids == reference.add_all(values)
            }
            Decision::Promote(i) => {
                let id = Id::from(i % subject.issued().max(1));
                subject.try_promote(id) == reference.try_promote(id)
            }
            Decision::PopMax => subject.pop_max() == reference.pop_max(),
        };

        if !agree || subject.get_max() != reference.get_max() {
            println!("step {step}: {d:?} disagrees with reference");
            return false;
        }
        if !invariants_hold(&subject) {
            println!("step {step}: {d:?} broke invariants");
            return false;
        }
    }
    true
}
