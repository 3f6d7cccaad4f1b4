/// Randomized edit-consistency tests every multigraph representation should
/// pass. The reference model is a dense entry-count matrix: `counts[u][v]`
/// holds the number of `v`-entries in the neighborhood of `u` (so a loop at
/// `u` adds 2 to `counts[u][u]`).
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident) => {
        mod $env {
            use crate::{ops::*, repr::*, NumEdges, NumNodes};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            #[test]
            fn graph_new() {
                for n in 1..50 {
                    let graph = <$graph>::new(n);

                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.vertices().len(), n as usize);
                    assert!(graph.is_singleton());
                    assert!(graph.degrees().all(|d| d == 0));
                }
            }

            #[test]
            fn random_edit_consistency() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [2 as NumNodes, 5, 10, 30] {
                    for _ in 0..10 {
                        let mut graph = <$graph>::new(n);
                        let mut counts = vec![vec![0 as NumEdges; n as usize]; n as usize];
                        let mut m: NumEdges = 0;

                        // insertions, including loops and parallel edges
                        for _ in 0..(3 * n) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            graph.add_edge(u, v);
                            counts[u as usize][v as usize] += 1;
                            counts[v as usize][u as usize] += 1;
                            m += 1;

                            assert_eq!(graph.number_of_edges(), m);
                        }

                        for u in 0..n {
                            assert_eq!(
                                graph.degree_of(u),
                                counts[u as usize].iter().sum::<NumEdges>()
                            );
                            for v in 0..n {
                                assert_eq!(
                                    graph.neighbors_of(u).filter(|&x| x == v).count() as NumEdges,
                                    counts[u as usize][v as usize]
                                );
                            }
                        }

                        // random removals
                        for _ in 0..(2 * n) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            let present = if u == v {
                                counts[u as usize][u as usize] >= 2
                            } else {
                                counts[u as usize][v as usize] >= 1
                            };

                            assert_eq!(graph.try_remove_edge(u, v), present);
                            if present {
                                counts[u as usize][v as usize] -= 1;
                                counts[v as usize][u as usize] -= 1;
                                m -= 1;
                            }
                            assert_eq!(graph.number_of_edges(), m);
                        }

                        // drain the rest pair by pair
                        for u in 0..n {
                            for v in u..n {
                                loop {
                                    let present = if u == v {
                                        counts[u as usize][u as usize] >= 2
                                    } else {
                                        counts[u as usize][v as usize] >= 1
                                    };
                                    if !present {
                                        break;
                                    }

                                    graph.remove_edge(u, v);
                                    counts[u as usize][v as usize] -= 1;
                                    counts[v as usize][u as usize] -= 1;
                                    m -= 1;
                                    assert_eq!(graph.number_of_edges(), m);
                                }

                                assert!(!graph.try_remove_edge(u, v));
                            }
                        }

                        assert!(graph.is_singleton());
                        assert!(graph.degrees().all(|d| d == 0));
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
