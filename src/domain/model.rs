use crate::utils::error::{KataError, Result};
use crate::utils::validation::validate_positive_number;
use serde::Serialize;

/// Rectangular lawn. Valid coordinates are `0..=width` x `0..=height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lawn {
    width: u32,
    height: u32,
}

impl Lawn {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        validate_positive_number("lawn.width", width, 1)?;
        validate_positive_number("lawn.height", height, 1)?;
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x <= self.width && y <= self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Orientation {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Orientation::North),
            'E' => Some(Orientation::East),
            'S' => Some(Orientation::South),
            'W' => Some(Orientation::West),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Orientation::North => 'N',
            Orientation::East => 'E',
            Orientation::South => 'S',
            Orientation::West => 'W',
        }
    }

    pub fn clockwise(self) -> Self {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }

    pub fn counter_clockwise(self) -> Self {
        match self {
            Orientation::North => Orientation::West,
            Orientation::West => Orientation::South,
            Orientation::South => Orientation::East,
            Orientation::East => Orientation::North,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Instruction {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "F")]
    Forward,
}

impl Instruction {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'L' => Some(Instruction::Left),
            'R' => Some(Instruction::Right),
            'F' => Some(Instruction::Forward),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Instruction::Left => 'L',
            Instruction::Right => 'R',
            Instruction::Forward => 'F',
        }
    }
}

/// A mower confined to its lawn.
///
/// The only way to obtain one is [`Mower::new`], which rejects positions
/// outside the lawn; [`Mower::step`] keeps the mower inside from then on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mower {
    x: u32,
    y: u32,
    orientation: Orientation,
    lawn: Lawn,
}

impl Mower {
    pub fn new(x: u32, y: u32, orientation: Orientation, lawn: Lawn) -> Result<Self> {
        if !lawn.contains(x, y) {
            return Err(KataError::OutOfLawn {
                x,
                y,
                width: lawn.width(),
                height: lawn.height(),
            });
        }
        Ok(Self {
            x,
            y,
            orientation,
            lawn,
        })
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn lawn(&self) -> &Lawn {
        &self.lawn
    }

    pub fn step(&mut self, instruction: Instruction) {
        match instruction {
            Instruction::Left => self.orientation = self.orientation.counter_clockwise(),
            Instruction::Right => self.orientation = self.orientation.clockwise(),
            Instruction::Forward => self.forward(),
        }
    }

    pub fn run(&mut self, instructions: &[Instruction]) {
        for instruction in instructions {
            self.step(*instruction);
        }
    }

    // 撞牆時該軸保持不變，不算錯誤
    fn forward(&mut self) {
        let (next_x, next_y) = match self.orientation {
            Orientation::North => (Some(self.x), self.y.checked_add(1)),
            Orientation::South => (Some(self.x), self.y.checked_sub(1)),
            Orientation::East => (self.x.checked_add(1), Some(self.y)),
            Orientation::West => (self.x.checked_sub(1), Some(self.y)),
        };

        if let Some(x) = next_x.filter(|x| *x <= self.lawn.width()) {
            self.x = x;
        }
        if let Some(y) = next_y.filter(|y| *y <= self.lawn.height()) {
            self.y = y;
        }
    }

    pub fn report(&self) -> MowerReport {
        MowerReport {
            x: self.x,
            y: self.y,
            orientation: self.orientation,
        }
    }
}

/// Final position of a mower, as written to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MowerReport {
    pub x: u32,
    pub y: u32,
    pub orientation: Orientation,
}

impl std::fmt::Display for MowerReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.x, self.y, self.orientation.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lawn_5x5() -> Lawn {
        Lawn::new(5, 5).unwrap()
    }

    #[test]
    fn test_lawn_rejects_zero_dimension() {
        assert!(Lawn::new(0, 5).is_err());
        assert!(Lawn::new(5, 0).is_err());
        assert!(Lawn::new(1, 1).is_ok());
    }

    #[test]
    fn test_mower_new_validates_bounds() {
        let lawn = lawn_5x5();
        assert!(Mower::new(0, 0, Orientation::North, lawn).is_ok());
        assert!(Mower::new(5, 5, Orientation::North, lawn).is_ok());
        assert!(matches!(
            Mower::new(6, 1, Orientation::North, lawn),
            Err(KataError::OutOfLawn { x: 6, y: 1, .. })
        ));
        assert!(Mower::new(1, 6, Orientation::North, lawn).is_err());
    }

    #[test]
    fn test_letter_mappings_are_bidirectional() {
        for orientation in Orientation::ALL {
            assert_eq!(Orientation::from_letter(orientation.letter()), Some(orientation));
        }
        for instruction in [Instruction::Left, Instruction::Right, Instruction::Forward] {
            assert_eq!(Instruction::from_letter(instruction.letter()), Some(instruction));
        }
        assert_eq!(Orientation::from_letter('X'), None);
        assert_eq!(Instruction::from_letter('M'), None);
    }

    #[test]
    fn test_four_rotations_return_to_start() {
        for orientation in Orientation::ALL {
            let mut left = Mower::new(2, 2, orientation, lawn_5x5()).unwrap();
            let mut right = left.clone();
            left.run(&[Instruction::Left; 4]);
            right.run(&[Instruction::Right; 4]);
            assert_eq!(left.orientation(), orientation);
            assert_eq!(right.orientation(), orientation);
        }
    }

    #[test]
    fn test_right_then_left_is_identity() {
        for orientation in Orientation::ALL {
            let mut mower = Mower::new(3, 1, orientation, lawn_5x5()).unwrap();
            mower.run(&[Instruction::Right, Instruction::Left]);
            assert_eq!((mower.x(), mower.y(), mower.orientation()), (3, 1, orientation));

            mower.run(&[Instruction::Left, Instruction::Right]);
            assert_eq!((mower.x(), mower.y(), mower.orientation()), (3, 1, orientation));
        }
    }

    #[test]
    fn test_rotation_order() {
        let mut mower = Mower::new(0, 0, Orientation::North, lawn_5x5()).unwrap();
        mower.step(Instruction::Right);
        assert_eq!(mower.orientation(), Orientation::East);
        mower.step(Instruction::Right);
        assert_eq!(mower.orientation(), Orientation::South);
        mower.step(Instruction::Left);
        mower.step(Instruction::Left);
        mower.step(Instruction::Left);
        assert_eq!(mower.orientation(), Orientation::West);
    }

    #[test]
    fn test_forward_moves_along_heading() {
        let lawn = lawn_5x5();
        let cases = [
            (Orientation::North, (2, 3)),
            (Orientation::South, (2, 1)),
            (Orientation::East, (3, 2)),
            (Orientation::West, (1, 2)),
        ];
        for (orientation, expected) in cases {
            let mut mower = Mower::new(2, 2, orientation, lawn).unwrap();
            mower.step(Instruction::Forward);
            assert_eq!((mower.x(), mower.y()), expected, "heading {:?}", orientation);
        }
    }

    #[test]
    fn test_forward_stops_at_every_wall() {
        let lawn = Lawn::new(3, 2).unwrap();
        let cases = [
            (0, 2, Orientation::North, (0, 2)),
            (1, 0, Orientation::South, (1, 0)),
            (3, 1, Orientation::East, (3, 1)),
            (0, 1, Orientation::West, (0, 1)),
        ];
        for (x, y, orientation, expected) in cases {
            let mut mower = Mower::new(x, y, orientation, lawn).unwrap();
            mower.run(&[Instruction::Forward; 3]);
            assert_eq!((mower.x(), mower.y()), expected, "heading {:?}", orientation);
            assert!(lawn.contains(mower.x(), mower.y()));
        }
    }

    #[test]
    fn test_classic_scenario() {
        let lawn = lawn_5x5();
        let mut first = Mower::new(1, 2, Orientation::North, lawn).unwrap();
        first.run(&[
            Instruction::Left,
            Instruction::Forward,
            Instruction::Right,
            Instruction::Forward,
            Instruction::Forward,
        ]);
        assert_eq!(first.report().to_string(), "04N");
    }

    #[test]
    fn test_report_serializes_orientation_letter() {
        let mower = Mower::new(1, 3, Orientation::North, lawn_5x5()).unwrap();
        let json = serde_json::to_string(&mower.report()).unwrap();
        assert_eq!(json, r#"{"x":1,"y":3,"orientation":"N"}"#);
    }
}
