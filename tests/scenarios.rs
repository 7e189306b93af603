use rover::{Fleet, Halt, Heading, InstructionPolicy, Mission, MotionTable, Plateau, RoverState};

fn simulate(input: &str) -> Vec<String> {
    let table = MotionTable::compass();
    let mut output = Vec::new();
    Mission::new(&table, InstructionPolicy::Strict)
        .run(input.as_bytes(), &mut output)
        .unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn two_rovers_reach_their_targets() {
    let output = simulate("5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM\n");
    assert_eq!(output, ["1 3 N", "5 1 E"]);
}

#[test]
fn rover_outside_the_plateau_never_moves() {
    let output = simulate("2 2\n5 5 N\nM\n");
    assert_eq!(output, ["5 5 N"]);
}

#[test]
fn later_rover_halts_before_an_earlier_one() {
    // Rover 2 would drive east through (1, 3), where rover 1 finished.
    let output = simulate("5 5\n1 2 N\nLMLMLMLMM\n0 3 E\nMMMM\n");
    assert_eq!(output, ["1 3 N", "0 3 E"]);

    // Approaching from further away, it stops in the cell before.
    let output = simulate("5 5\n3 3 N\n\n0 3 E\nMMMMM\n");
    assert_eq!(output, ["3 3 N", "2 3 E"]);
}

#[test]
fn every_rover_joins_the_fleet_in_order() {
    let table = MotionTable::compass();
    let mut fleet = Fleet::new(Plateau::new(5, 5));
    let starts = ["1 2 N", "3 3 E", "9 9 S"];
    let lines = ["LMLMLMLMM", "MMRMMRMRRM", "M"];

    for (start, line) in starts.iter().zip(lines) {
        let start = RoverState::parse(start, &table).unwrap();
        let instructions = rover::parse_instructions(line, InstructionPolicy::Strict).unwrap();
        let traverse = rover::sequence(start, &instructions, &fleet, &table);
        fleet.complete(traverse.state);
    }

    assert_eq!(
        fleet.completed(),
        &[
            RoverState::new(1, 3, Heading::North),
            RoverState::new(5, 1, Heading::East),
            RoverState::new(9, 9, Heading::South),
        ]
    );
}

#[test]
fn halting_is_reported_not_raised() {
    let table = MotionTable::compass();
    let fleet = Fleet::new(Plateau::new(1, 1));
    let start = RoverState::new(1, 1, Heading::North);
    let instructions = rover::parse_instructions("MRM", InstructionPolicy::Strict).unwrap();
    let traverse = rover::sequence(start, &instructions, &fleet, &table);
    assert_eq!(traverse.state, start);
    assert!(matches!(traverse.halt, Halt::Blocked { at: 0, .. }));
}
