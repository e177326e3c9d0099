use ttt_oracle::board::Board;
use ttt_oracle::generator::DatasetGenerator;
use ttt_oracle::oracle;
use ttt_oracle::random::SeededRandomGenerator;

fn main() {
    // X at 0 and 1, O at 3, O to move
    let board = Board::from_external(&[1, 1, 3, 0, 3, 3, 3, 3, 3]).unwrap();
    let mover = board.next_player();
    println!("{board}\n{mover:?} to move");

    // Print the score of every reply
    for index in board.empty_cells() {
        let mut child = board;
        child.place(index, mover);
        let score = oracle::evaluate(&mut child, mover.other().is_maximizer());
        println!("Move: {index} = {score}");
    }

    println!("Forced outcome: {:?}", oracle::solve(&board));

    // Generate a few labeled samples
    let mut generator = DatasetGenerator::builder()
        .with_random_generator(SeededRandomGenerator::new(2024))
        .build();
    for sample in generator.generate(5) {
        println!("{:?} -> {:?}", sample.input, sample.label);
    }
}
