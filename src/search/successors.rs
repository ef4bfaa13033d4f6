use crate::error::{Error, Result};
use crate::graph::Network;
use crate::state::State;
use crate::transport::Cost;

use smallvec::SmallVec;

pub type Successors = SmallVec<[(State, Cost); 8]>;

/// Every transition out of `state` with its step cost: first the in-place
/// mode transfers permitted by the vertex, then each arc traversal
/// permitted by the arc's matrix from the current mode.
///
/// An arc pointing outside the network aborts with [`Error::DanglingArc`].
pub fn successors<N>(network: &N, state: State) -> Result<Successors>
where
    N: Network,
{
    let (id, mode) = state.decode();
    let vertex = network.vertex(id)?;

    let mut successors = vertex
        .transfers()
        .transitions(mode)
        .map(|(to, cost)| (State::encode(id, to), cost))
        .collect::<Successors>();

    for arc in vertex.arcs() {
        let target = arc.target();
        if target >= network.vertex_count() {
            return Err(Error::DanglingArc { from: id, target });
        }

        successors.extend(
            arc.costs()
                .transitions(mode)
                .map(|(to, cost)| (State::encode(target, to), cost)),
        );
    }

    Ok(successors)
}
