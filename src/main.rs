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

use clap::Parser;
use std::path::Path;

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde;

#[macro_use]
pub mod log;
pub mod nl_loader;
pub mod projector;
pub mod exporter;

use crate::nl_loader::OpenOpts;
use crate::projector::HyperedgeExpansion;
#[allow(unused)]
use crate::log::*;

#[derive(Parser, Debug)]
#[clap(
    author = "Antmicro",
    version = "0.0.1",
    about = "NLVIS - Abstract Netlist Visualization Preprocessor",
    long_about = None
)]
struct Args {
    #[clap(help = "Abstract netlist JSON file")]
    netlist: String,
    #[clap(long, help = "Input file is gzip-compressed")]
    gz: bool,
    #[clap(long, help = "Output path for the visualization graph in JSON format")]
    json: Option<String>,
    #[clap(long, help = "Output path for a graphviz .dot rendition of the graph")]
    dot: Option<String>,
    #[clap(
        long,
        help = "Expand nets of degree > 2 into synthetic hub nodes instead of cliques"
    )]
    hub_nets: bool,
}

fn main() {
    let args = Args::parse();

    let netlist = nl_loader::open(
        Path::new(&args.netlist),
        OpenOpts { gz: args.gz }
    ).expect("Couldn't load abstract netlist");

    dbg_log!(
        DBG_INFO,
        "Loaded netlist with {} groups and {} hyperedges",
        netlist.total_group_num,
        netlist.total_edge_num
    );

    let expansion = if args.hub_nets {
        HyperedgeExpansion::Hub
    } else {
        HyperedgeExpansion::Clique
    };

    let graph = projector::project(&netlist, expansion)
        .expect("Netlist violates its declared structure");

    println!(concat!(
        "Abstract netlist {}:\n",
        "    No. of groups:                   {}\n",
        "    No. of hyperedges:               {}\n",
        "    No. of render nodes:             {}\n",
        "    No. of render edges:             {}"
        ),
        args.netlist,
        netlist.abstract_groups.len(),
        netlist.abstract_edges.len(),
        graph.nodes.len(),
        graph.edges.len()
    );

    if let Some(json_path) = &args.json {
        exporter::export_json(json_path, &graph)
            .expect("Couldn't write visualization JSON");
    }

    if let Some(dot_path) = &args.dot {
        let graph_name = Path::new(&args.netlist).file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "netlist".to_string());
        exporter::export_dot(dot_path, &graph, &graph_name)
            .expect("Couldn't write .dot file");
    }
}
