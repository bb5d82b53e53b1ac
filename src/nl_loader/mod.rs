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


use std::path::Path;
use std::fs::File;
use std::io::BufReader;
use flate2::read::GzDecoder;

#[derive(Debug, Clone)]
pub enum LoadError {
    CantOpenFile(String),
    /* Required field missing or of the wrong type */
    MalformedInput(String),
}

/* A cluster of primitive cells collapsed into a single visual node
 * by the partitioning flow. */
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AbstractGroup {
    pub id: u32,
    pub prim_cell_num: u32,
}

/* A multi-terminal net between groups. `degree` is declared redundantly
 * by the producer and must match the incident-group list length. */
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AbstractEdge {
    pub incident_group_ids: Vec<u32>,
    pub weight: f64,
    pub degree: usize,
}

/* Full partition-result dumps carry more fields (resource utilization,
 * cell name lists, placement hints); everything not listed here is
 * ignored on deserialization. */
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AbstractNetlist {
    pub total_group_num: usize,
    pub total_edge_num: usize,
    pub abstract_groups: Vec<AbstractGroup>,
    pub abstract_edges: Vec<AbstractEdge>,
}

pub struct OpenOpts {
    pub gz: bool,
}

impl Default for OpenOpts {
    fn default() -> Self {
        Self {
            gz: false
        }
    }
}

pub fn open<P>(path: P, opts: OpenOpts) -> Result<AbstractNetlist, LoadError> where
    P: AsRef<Path>,
{
    let netlist_file = File::open(path)
        .map_err(|e| LoadError::CantOpenFile(format!("{:?}", e)))?;

    let netlist = if opts.gz {
        serde_json::from_reader(BufReader::new(GzDecoder::new(netlist_file)))
    } else {
        serde_json::from_reader(BufReader::new(netlist_file))
    };

    netlist.map_err(|e| LoadError::MalformedInput(format!("{}", e)))
}

pub fn from_str(s: &str) -> Result<AbstractNetlist, LoadError> {
    serde_json::from_str(s)
        .map_err(|e| LoadError::MalformedInput(format!("{}", e)))
}
