/* Copyright (C) 2022 Antmicro
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     https://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::collections::HashSet;

use crate::nl_loader::AbstractNetlist;
#[allow(unused)]
use crate::log::*;


/* Visual-weight policy: a group of N primitive cells is drawn with
 * size N / 50, floored at 5 so that tiny groups stay visible. Both
 * constants are part of the contract with the renderer. */
pub const NODE_SIZE_DIVISOR: f64 = 50.0;
pub const MIN_NODE_SIZE: f64 = 5.0;

pub const HUB_NODE_SIZE: f64 = 50.0;
pub const HUB_NODE_COLOR: &'static str = "#dd4b39";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderNode {
    pub id: u32,
    pub label: String,
    pub size: f64,
    /* Only synthetic hub nodes get a color; group nodes use the
     * renderer's default. */
    pub color: Option<String>,
}

/* Semantically an unordered pair. The from/to split only records the
 * order in which the expansion visited the endpoints. */
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderEdge {
    pub from: u32,
    pub to: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderGraph {
    pub nodes: Vec<RenderNode>,
    pub edges: Vec<RenderEdge>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /* Declared totalGroupNum/totalEdgeNum disagrees with the actual
     * collection length */
    CountMismatch {
        field: &'static str,
        declared: usize,
        actual: usize,
    },
    DegreeMismatch {
        edge_idx: usize,
        declared: usize,
        actual: usize,
    },
    UnknownGroupReference {
        edge_idx: usize,
        group_id: u32,
    },
    /* A hyperedge listing the same group twice would pair a node with
     * itself under expansion */
    DuplicateIncidentGroup {
        edge_idx: usize,
        group_id: u32,
    },
    /* No id left above the highest group id to assign to a synthetic
     * hub node */
    HubIdSpaceExhausted {
        edge_idx: usize,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HyperedgeExpansion {
    /* Replace a hyperedge over d groups with all d*(d-1)/2 pairwise
     * edges. Lossy: "these d groups share one net" collapses to mere
     * pairwise adjacency, and the edge count is quadratic in net
     * degree, so high-fanout nets blow up the drawing. */
    Clique,
    /* Keep degree-2 nets as direct edges, but give every higher-degree
     * net a synthetic hub node with one spoke per incident group. */
    Hub,
}

fn node_size(prim_cell_num: u32) -> f64 {
    let size = prim_cell_num as f64 / NODE_SIZE_DIVISOR;
    if size < MIN_NODE_SIZE {
        MIN_NODE_SIZE
    } else {
        size
    }
}

/* Projects an abstract netlist onto a plain node/edge graph for a
 * force-directed renderer. Pure and all-or-nothing: any structural
 * violation fails the whole projection, since a partially built
 * visualization graph is worse than none. */
pub fn project(netlist: &AbstractNetlist, expansion: HyperedgeExpansion)
    -> Result<RenderGraph, ProjectionError>
{
    if netlist.total_group_num != netlist.abstract_groups.len() {
        return Err(ProjectionError::CountMismatch {
            field: "totalGroupNum",
            declared: netlist.total_group_num,
            actual: netlist.abstract_groups.len(),
        });
    }
    if netlist.total_edge_num != netlist.abstract_edges.len() {
        return Err(ProjectionError::CountMismatch {
            field: "totalEdgeNum",
            declared: netlist.total_edge_num,
            actual: netlist.abstract_edges.len(),
        });
    }

    let mut graph = RenderGraph::default();
    let mut group_ids = HashSet::with_capacity(netlist.abstract_groups.len());

    for group in &netlist.abstract_groups {
        group_ids.insert(group.id);
        graph.nodes.push(RenderNode {
            id: group.id,
            label: format!("grp-{}", group.id),
            size: node_size(group.prim_cell_num),
            color: None,
        });
    }

    /* Hub ids must not collide with group ids, which need not be
     * contiguous, so allocate past the highest one actually present
     * instead of trusting the declared total as an offset. None means
     * the id space is used up, which only matters once a hub is
     * actually needed. */
    let mut next_hub_id = netlist.abstract_groups.iter()
        .map(|g| g.id)
        .max()
        .map_or(Some(0), |max_id| max_id.checked_add(1));

    for (edge_idx, edge) in netlist.abstract_edges.iter().enumerate() {
        let incident = &edge.incident_group_ids;

        if edge.degree != incident.len() {
            return Err(ProjectionError::DegreeMismatch {
                edge_idx,
                declared: edge.degree,
                actual: incident.len(),
            });
        }

        let mut seen = HashSet::with_capacity(incident.len());
        for &group_id in incident {
            if !group_ids.contains(&group_id) {
                return Err(ProjectionError::UnknownGroupReference { edge_idx, group_id });
            }
            if !seen.insert(group_id) {
                return Err(ProjectionError::DuplicateIncidentGroup { edge_idx, group_id });
            }
        }

        if incident.len() < 2 {
            dbg_log!(
                DBG_WARN,
                "hyperedge {} has degree {}, nothing to draw",
                edge_idx,
                incident.len()
            );
            continue;
        }

        match expansion {
            HyperedgeExpansion::Clique => {
                for i in 0 .. incident.len() {
                    for j in (i + 1) .. incident.len() {
                        graph.edges.push(RenderEdge {
                            from: incident[i],
                            to: incident[j],
                        });
                    }
                }
            },
            HyperedgeExpansion::Hub => {
                if incident.len() == 2 {
                    graph.edges.push(RenderEdge {
                        from: incident[0],
                        to: incident[1],
                    });
                } else {
                    let hub_id = next_hub_id
                        .ok_or(ProjectionError::HubIdSpaceExhausted { edge_idx })?;
                    next_hub_id = hub_id.checked_add(1);
                    graph.nodes.push(RenderNode {
                        id: hub_id,
                        label: format!("edge-{}", hub_id),
                        size: HUB_NODE_SIZE,
                        color: Some(HUB_NODE_COLOR.to_string()),
                    });
                    for &group_id in incident {
                        graph.edges.push(RenderEdge {
                            from: hub_id,
                            to: group_id,
                        });
                    }
                }
            },
        }
    }

    Ok(graph)
}
