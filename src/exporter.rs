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


use std::fs::File;
use std::fmt::Write as FmtWrite;
use std::io::Write;
use std::path::Path;

use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::projector::{RenderEdge, RenderGraph, RenderNode};

/* The wire shape follows the vis-network convention the rendering page
 * expects ("value" for node size, "from"/"to" for edges), so the
 * in-memory structs get hand-written Serialize impls instead of derives. */

impl Serialize for RenderNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
        S: Serializer
    {
        let fields = if self.color.is_some() { 4 } else { 3 };
        let mut s = serializer.serialize_struct("RenderNode", fields)?;
        s.serialize_field("id", &self.id)?;
        s.serialize_field("label", &self.label)?;
        s.serialize_field("value", &self.size)?;
        if let Some(color) = &self.color {
            s.serialize_field("color", color)?;
        }
        s.end()
    }
}

impl Serialize for RenderEdge {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
        S: Serializer
    {
        let mut s = serializer.serialize_struct("RenderEdge", 2)?;
        s.serialize_field("from", &self.from)?;
        s.serialize_field("to", &self.to)?;
        s.end()
    }
}

impl Serialize for RenderGraph {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
        S: Serializer
    {
        let mut s = serializer.serialize_struct("RenderGraph", 2)?;
        s.serialize_field("nodes", &self.nodes)?;
        s.serialize_field("edges", &self.edges)?;
        s.end()
    }
}

pub fn export_json<P>(path: P, graph: &RenderGraph) -> std::io::Result<()> where
    P: AsRef<Path>
{
    let data = serde_json::to_string_pretty(graph).unwrap();
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())
}

/* Graphviz rendition of the same graph, mostly useful for eyeballing
 * small netlists without spinning up the interactive renderer. */
pub fn render_graph_to_dot(graph: &RenderGraph, name: &str) -> String {
    let mut dot = String::new();

    writeln!(dot, "graph \"{}\" {{", name).unwrap();
    for node in &graph.nodes {
        write!(dot, "    n{} [label=\"{}\", width={}", node.id, node.label, node.size)
            .unwrap();
        if let Some(color) = &node.color {
            write!(dot, ", color=\"{}\"", color).unwrap();
        }
        writeln!(dot, "];").unwrap();
    }
    for edge in &graph.edges {
        writeln!(dot, "    n{} -- n{};", edge.from, edge.to).unwrap();
    }
    writeln!(dot, "}}").unwrap();

    dot
}

pub fn export_dot<P>(path: P, graph: &RenderGraph, name: &str) -> std::io::Result<()> where
    P: AsRef<Path>
{
    let mut file = File::create(path)?;
    file.write_all(render_graph_to_dot(graph, name).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> RenderGraph {
        RenderGraph {
            nodes: vec![
                RenderNode { id: 0, label: "grp-0".into(), size: 5.0, color: None },
                RenderNode {
                    id: 1,
                    label: "edge-1".into(),
                    size: 50.0,
                    color: Some("#dd4b39".into()),
                },
            ],
            edges: vec![RenderEdge { from: 1, to: 0 }],
        }
    }

    #[test]
    fn test_json_wire_shape() {
        let v = serde_json::to_value(&sample_graph()).unwrap();

        assert_eq!(v["nodes"][0]["id"], 0);
        assert_eq!(v["nodes"][0]["label"], "grp-0");
        assert_eq!(v["nodes"][0]["value"], 5.0);
        assert!(v["nodes"][0].get("color").is_none());
        assert_eq!(v["nodes"][1]["color"], "#dd4b39");
        assert_eq!(v["edges"][0]["from"], 1);
        assert_eq!(v["edges"][0]["to"], 0);
    }

    #[test]
    fn test_dot_rendition() {
        let dot = render_graph_to_dot(&sample_graph(), "sample");

        assert!(dot.starts_with("graph \"sample\" {"));
        assert!(dot.contains("n0 [label=\"grp-0\", width=5];"));
        assert!(dot.contains("n1 [label=\"edge-1\", width=50, color=\"#dd4b39\"];"));
        assert!(dot.contains("n1 -- n0;"));
        assert!(dot.trim_end().ends_with('}'));
    }
}
