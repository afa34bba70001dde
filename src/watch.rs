// This file is part of ccasm, an assembler for the CCA virtual machine.
//
// ccasm is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published
// by the Free Software Foundation, either version 3 of the License,
// or (at your option) any later version.
//
// ccasm is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See
// the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with ccasm.  If not, see <http://www.gnu.org/licenses/>.

//! Rebuild-on-save: reruns the assembler whenever the input file changes.
//!
//! Isolated behind a plain `FnMut()` callback so the pipeline in
//! `cca_asm` stays a pure function of source text (`spec.md` §5) — this
//! module, not the library, owns the one piece of concurrency in the
//! whole program.

use std::path::Path;
use std::sync::mpsc::channel;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Watches `path` and invokes `on_change` once per modification event.
///
/// Blocks the calling thread forever. Returns only if the watcher itself
/// fails to start or its channel disconnects.
pub fn watch(path: &Path, mut on_change: impl FnMut()) -> notify::Result<()> {
    let (tx, rx) = channel::<Event>();

    let mut watcher: RecommendedWatcher =
        notify::recommended_watcher(move |res: notify::Result<Event>| {
            if let Ok(event) = res {
                let _ = tx.send(event);
            }
        })?;

    watcher.watch(path, RecursiveMode::NonRecursive)?;

    for event in rx {
        if matches!(event.kind, EventKind::Modify(_)) {
            on_change();
        }
    }

    Ok(())
}
