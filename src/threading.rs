// Joseph Prichard
// 10/16/2026
// Threading operations

use std::io;
use std::thread::available_parallelism;
use rayon::ThreadPool;

pub fn thread_count(multithreaded: bool, entry_count: usize) -> io::Result<usize> {
    // one thread per entry at most, and a single thread unless -mt was given
    if multithreaded {
        Ok(entry_count.min(available_parallelism()?.get()).max(1))
    } else {
        Ok(1)
    }
}

pub fn configure_thread_pool(multithreaded: bool, entry_count: usize) -> io::Result<ThreadPool> {
    let threads = thread_count(multithreaded, entry_count)?;
    eprintln!("Running with {} threads", threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
