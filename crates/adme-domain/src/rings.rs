//! Ring perception over the molecular graph.
//!
//! The ring count is the cyclomatic number (bonds − atoms + components),
//! which equals the size of a smallest set of smallest rings. `find_sssr`
//! materializes one such set by taking, for every ring bond, the shortest
//! cycle through it and deduplicating.

use std::collections::{BTreeSet, VecDeque};

use crate::molecule::Molecule;

pub fn connected_components(mol: &Molecule) -> usize {
    let n = mol.atom_count();
    let mut visited = vec![false; n];
    let mut count = 0;
    for start in 0..n {
        if visited[start] {
            continue;
        }
        count += 1;
        let mut queue = VecDeque::from([start]);
        visited[start] = true;
        while let Some(curr) = queue.pop_front() {
            for &(neighbor, _) in &mol.adjacency[curr] {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }
    }
    count
}

pub fn cyclomatic_number(mol: &Molecule) -> usize {
    (mol.bond_count() + connected_components(mol)).saturating_sub(mol.atom_count())
}

/// Per-bond flag: does the bond lie on any cycle? A bond is a ring bond iff
/// its endpoints stay connected when the bond itself is removed.
pub fn ring_bond_flags(mol: &Molecule) -> Vec<bool> {
    (0..mol.bond_count())
        .map(|b| path_avoiding_bond(mol, mol.bonds[b].atom1, mol.bonds[b].atom2, b).is_some())
        .collect()
}

/// Per-atom flag derived from the ring bonds.
pub fn ring_atom_flags(mol: &Molecule) -> Vec<bool> {
    let bond_flags = ring_bond_flags(mol);
    let mut flags = vec![false; mol.atom_count()];
    for (b, bond) in mol.bonds.iter().enumerate() {
        if bond_flags[b] {
            flags[bond.atom1] = true;
            flags[bond.atom2] = true;
        }
    }
    flags
}

/// A smallest set of smallest rings, each ring given as its atom indices.
pub fn find_sssr(mol: &Molecule) -> Vec<Vec<usize>> {
    let target = cyclomatic_number(mol);
    if target == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<BTreeSet<usize>> = Vec::new();
    for (b, bond) in mol.bonds.iter().enumerate() {
        if let Some(path) = path_avoiding_bond(mol, bond.atom1, bond.atom2, b) {
            let ring: BTreeSet<usize> = path.into_iter().collect();
            if !candidates.contains(&ring) {
                candidates.push(ring);
            }
        }
    }
    candidates.sort_by_key(|r| r.len());
    candidates
        .into_iter()
        .take(target)
        .map(|r| r.into_iter().collect())
        .collect()
}

/// Shortest path between `from` and `to` that does not traverse bond
/// `skip_bond`; `None` when removing the bond disconnects them.
fn path_avoiding_bond(
    mol: &Molecule,
    from: usize,
    to: usize,
    skip_bond: usize,
) -> Option<Vec<usize>> {
    let n = mol.atom_count();
    let mut parent = vec![usize::MAX; n];
    let mut visited = vec![false; n];
    let mut queue = VecDeque::from([from]);
    visited[from] = true;

    while let Some(curr) = queue.pop_front() {
        if curr == to {
            let mut path = vec![to];
            let mut at = to;
            while at != from {
                at = parent[at];
                path.push(at);
            }
            return Some(path);
        }
        for &(neighbor, bond) in &mol.adjacency[curr] {
            if bond != skip_bond && !visited[neighbor] {
                visited[neighbor] = true;
                parent[neighbor] = curr;
                queue.push_back(neighbor);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles::parse_smiles;

    #[test]
    fn chain_has_no_rings() {
        let mol = parse_smiles("CCCCC").unwrap();
        assert_eq!(cyclomatic_number(&mol), 0);
        assert!(find_sssr(&mol).is_empty());
        assert!(ring_bond_flags(&mol).iter().all(|&f| !f));
    }

    #[test]
    fn benzene_single_ring() {
        let mol = parse_smiles("c1ccccc1").unwrap();
        assert_eq!(cyclomatic_number(&mol), 1);
        let rings = find_sssr(&mol);
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 6);
        assert!(ring_atom_flags(&mol).iter().all(|&f| f));
    }

    #[test]
    fn naphthalene_two_fused_rings() {
        let mol = parse_smiles("c1ccc2ccccc2c1").unwrap();
        assert_eq!(cyclomatic_number(&mol), 2);
        let rings = find_sssr(&mol);
        assert_eq!(rings.len(), 2);
        assert!(rings.iter().all(|r| r.len() == 6));
    }

    #[test]
    fn toluene_methyl_not_in_ring() {
        let mol = parse_smiles("Cc1ccccc1").unwrap();
        let flags = ring_atom_flags(&mol);
        assert!(!flags[0]);
        assert!(flags[1..].iter().all(|&f| f));
    }

    #[test]
    fn disconnected_fragments_counted_separately() {
        let mol = parse_smiles("C1CC1.C1CCC1").unwrap();
        assert_eq!(connected_components(&mol), 2);
        assert_eq!(cyclomatic_number(&mol), 2);
        let rings = find_sssr(&mol);
        assert_eq!(rings.len(), 2);
    }
}
