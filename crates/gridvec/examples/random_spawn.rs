use gridvec::GridVec2;

fn main() {
    // A 12x8 board; the bound is the exclusive upper corner, anchored at the origin.
    let board = GridVec2::new(12, 8);
    let num_spawns = 5;

    let mut rng = rand::rng();

    println!("Board bound: {}", board);
    println!("Sampling {} spawn points...", num_spawns);

    let mut spawns = Vec::new();
    for i in 0..num_spawns {
        let p = GridVec2::random_vector(board, &mut rng);
        println!("Spawn {:>2}: {}", i + 1, p);
        spawns.push(p);
    }

    print_board(board, &spawns);

    // Step the first spawn one cell east and check it stays on the board.
    let step = GridVec2::new(1, 0);
    let moved = spawns[0] + step;
    if moved.contains(board) {
        println!("\n{} + {} = {} stays on the board.", spawns[0], step, moved);
    } else {
        println!("\n{} + {} = {} walks off the board.", spawns[0], step, moved);
    }
}

fn print_board(board: GridVec2, spawns: &[GridVec2]) {
    println!("\nBoard ('S' marks a spawn):");
    for z in 0..board.z {
        for x in 0..board.x {
            let here = GridVec2::new(x, z);
            if spawns.contains(&here) {
                print!(" S");
            } else {
                print!(" .");
            }
        }
        println!();
    }
}
