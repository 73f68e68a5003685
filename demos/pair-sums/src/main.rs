use pair_sums::solve;
use scankit::io::session;

fn main() -> Result<(), pair_sums::PairSumError> {
    // The session flushes stdout when it drops, on success and error alike.
    let mut io = session();
    let (input, output) = io.parts();
    solve(input, output)
}
