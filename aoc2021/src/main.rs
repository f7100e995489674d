use std::fmt;
use std::io::{self, Write};

use arrayvec::ArrayVec;
use bitvec::prelude::*;
use itertools::Itertools;
use regex::Regex;
use rustc_hash::FxHashMap;

fn day1(part: u8, s: &str) -> String {
    let depths: Vec<u64> = s.split_whitespace().map(|d| d.parse().expect(d)).collect();
    let increases = if part == 1 {
        depths.iter().tuple_windows().filter(|(prev, next)| next > prev).count()
    } else {
        // overlapping three-reading windows share their middle terms, so the
        // window sums compare as the readings three apart
        depths.windows(4).filter(|w| w[3] > w[0]).count()
    };
    increases.to_string()
}

fn day2(part: u8, s: &str) -> String {
    let mut position = 0i64;
    let mut depth = 0i64;
    let mut aim = 0i64;
    for line in s.trim().lines() {
        let (direction, amount) = line.split_once(' ').expect(line);
        let amount: i64 = amount.parse().expect(line);
        match (part, direction) {
            (1, "forward") => position += amount,
            (1, "down") => depth += amount,
            (1, "up") => depth -= amount,
            (_, "forward") => {
                position += amount;
                depth += aim * amount;
            }
            (_, "down") => aim += amount,
            (_, "up") => aim -= amount,
            _ => panic!("no support for direction {}", direction),
        }
    }
    (position * depth).to_string()
}

fn day3(part: u8, s: &str) -> String {
    let readings: Vec<&str> = s.trim().lines().collect();
    let width = readings[0].len();
    if part == 1 {
        let mut gamma = 0u64;
        for ix in 0..width {
            let ones = readings.iter().filter(|r| r.as_bytes()[ix] == b'1').count();
            gamma = gamma << 1 | (ones * 2 > readings.len()) as u64;
        }
        let epsilon = !gamma & ((1u64 << width) - 1);
        (gamma * epsilon).to_string()
    } else {
        let rating = |most_common: bool| -> u64 {
            let mut candidates = readings.clone();
            for ix in 0..width {
                if candidates.len() == 1 {
                    break;
                }
                let ones = candidates.iter().filter(|r| r.as_bytes()[ix] == b'1').count();
                let keep = if (ones * 2 >= candidates.len()) == most_common { b'1' } else { b'0' };
                candidates.retain(|r| r.as_bytes()[ix] == keep);
            }
            assert_eq!(candidates.len(), 1, "rating filter did not converge");
            u64::from_str_radix(candidates[0], 2).expect(candidates[0])
        };
        (rating(true) * rating(false)).to_string()
    }
}

struct Board {
    squares: ArrayVec<u32, 25>,
    marked: BitArr!(for 25),
}

impl Board {
    fn parse(section: &str) -> Board {
        let squares: ArrayVec<u32, 25> =
            section.split_whitespace().map(|n| n.parse().expect(n)).collect();
        assert_eq!(squares.len(), 25, "board is not 5x5");
        Board { squares, marked: bitarr![0; 25] }
    }

    /// Marks `draw` if the board holds it; true when that completes a row or column.
    fn mark(&mut self, draw: u32) -> bool {
        match self.squares.iter().position(|&n| n == draw) {
            Some(ix) => {
                self.marked.set(ix, true);
                let (row, col) = (ix / 5, ix % 5);
                (0..5).all(|i| self.marked[row * 5 + i]) || (0..5).all(|i| self.marked[i * 5 + col])
            }
            None => false,
        }
    }

    fn score(&self, draw: u32) -> u32 {
        let unmarked: u32 = (0..25).filter(|&ix| !self.marked[ix]).map(|ix| self.squares[ix]).sum();
        unmarked * draw
    }
}

fn day4(part: u8, s: &str) -> String {
    let mut sections = s.trim().split("\n\n");
    let draws: Vec<u32> = sections
        .next()
        .expect("missing draw list")
        .split(',')
        .map(|n| n.parse().expect(n))
        .collect();
    let mut boards: Vec<Board> = sections.map(Board::parse).collect();

    let mut first: Option<(usize, u32)> = None;
    let mut last: Option<(usize, u32)> = None;
    for board in &mut boards {
        for (t, &draw) in draws.iter().enumerate() {
            if board.mark(draw) {
                let win = (t, board.score(draw));
                if first.map_or(true, |(ft, _)| t < ft) {
                    first = Some(win);
                }
                if last.map_or(true, |(lt, _)| t > lt) {
                    last = Some(win);
                }
                break;
            }
        }
    }
    let (_, score) = (if part == 1 { first } else { last }).expect("no board ever wins");
    score.to_string()
}

fn day5(part: u8, s: &str) -> String {
    let segment = Regex::new(r"(\d+),(\d+) -> (\d+),(\d+)").unwrap();
    let mut covered: FxHashMap<(i64, i64), u32> = FxHashMap::default();
    for caps in segment.captures_iter(s) {
        let n = |i: usize| caps[i].parse::<i64>().unwrap();
        let (x1, y1, x2, y2) = (n(1), n(2), n(3), n(4));
        if part == 1 && x1 != x2 && y1 != y2 {
            continue;
        }
        let (dx, dy) = ((x2 - x1).signum(), (y2 - y1).signum());
        let (mut x, mut y) = (x1, y1);
        loop {
            *covered.entry((x, y)).or_insert(0) += 1;
            if (x, y) == (x2, y2) {
                break;
            }
            x += dx;
            y += dy;
        }
    }
    covered.values().filter(|&&hits| hits > 1).count().to_string()
}

fn day6(part: u8, s: &str) -> String {
    // one bucket per timer value; a day is a rotation plus the resets at 6
    let mut timers = [0u64; 9];
    for age in s.trim().split(',') {
        let age: usize = age.parse().expect(age);
        timers[age] += 1;
    }
    let days = if part == 1 { 80 } else { 256 };
    for _ in 0..days {
        timers.rotate_left(1);
        timers[6] += timers[8];
    }
    timers.iter().sum::<u64>().to_string()
}

fn day7(part: u8, s: &str) -> String {
    let positions: Vec<i64> = s.trim().split(',').map(|p| p.parse().expect(p)).collect();
    let furthest = *positions.iter().max().expect("no crabs");
    (0..=furthest)
        .map(|target| {
            positions
                .iter()
                .map(|&p| {
                    let distance = (p - target).abs();
                    if part == 1 { distance } else { distance * (distance + 1) / 2 }
                })
                .sum::<i64>()
        })
        .min()
        .unwrap()
        .to_string()
}

fn day8(part: u8, s: &str) -> String {
    assert_eq!(part, 1, "day 8 part 2 was never implemented");
    s.trim()
        .lines()
        .map(|line| {
            let (_, outputs) = line.split_once('|').expect(line);
            // 1, 7, 4 and 8 are the only digits with those segment counts
            outputs.split_whitespace().filter(|d| matches!(d.len(), 2 | 3 | 4 | 7)).count()
        })
        .sum::<usize>()
        .to_string()
}

fn day12(part: u8, s: &str) -> String {
    fn intern<'a>(ids: &mut FxHashMap<&'a str, usize>, big: &mut Vec<bool>, name: &'a str) -> usize {
        *ids.entry(name).or_insert_with(|| {
            big.push(name.chars().all(|c| c.is_ascii_uppercase()));
            big.len() - 1
        })
    }

    fn explore(
        adjacent: &[Vec<usize>],
        big: &[bool],
        visits: &mut [u8],
        at: usize,
        start: usize,
        end: usize,
        extra_spent: bool,
    ) -> u64 {
        if at == end {
            return 1;
        }
        let mut paths = 0;
        for &next in &adjacent[at] {
            if next == start {
                continue;
            }
            let mut spent = extra_spent;
            if !big[next] && visits[next] > 0 {
                if spent {
                    continue;
                }
                spent = true;
            }
            visits[next] += 1;
            paths += explore(adjacent, big, visits, next, start, end, spent);
            visits[next] -= 1;
        }
        paths
    }

    let mut ids: FxHashMap<&str, usize> = FxHashMap::default();
    let mut big: Vec<bool> = Vec::new();
    let mut edges: Vec<(usize, usize)> = Vec::new();
    for line in s.trim().lines() {
        let (a, b) = line.split_once('-').expect(line);
        let edge = (intern(&mut ids, &mut big, a), intern(&mut ids, &mut big, b));
        edges.push(edge);
    }
    let mut adjacent = vec![Vec::new(); big.len()];
    for (a, b) in edges {
        adjacent[a].push(b);
        adjacent[b].push(a);
    }
    let start = ids["start"];
    let end = ids["end"];

    let mut visits = vec![0u8; big.len()];
    visits[start] = 1;
    explore(&adjacent, &big, &mut visits, start, start, end, part == 1).to_string()
}

struct Seafloor {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl Seafloor {
    fn parse(s: &str) -> Seafloor {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;
        for line in s.trim().lines() {
            if width == 0 {
                width = line.len();
            }
            assert_eq!(line.len(), width, "ragged seafloor row");
            for &cell in line.as_bytes() {
                assert!(matches!(cell, b'>' | b'v' | b'.'), "unexpected cell {}", cell as char);
                cells.push(cell);
            }
            height += 1;
        }
        Seafloor { cells, width, height }
    }

    /// One step: the east herd moves as a whole, then the south herd.
    /// Returns how many cucumbers moved.
    fn step(&mut self) -> usize {
        let mut moves: Vec<(usize, usize)> = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cells[y * self.width + x] == b'>' {
                    let to = y * self.width + (x + 1) % self.width;
                    if self.cells[to] == b'.' {
                        moves.push((y * self.width + x, to));
                    }
                }
            }
        }
        let mut moved = moves.len();
        for &(from, to) in &moves {
            self.cells[from] = b'.';
            self.cells[to] = b'>';
        }

        moves.clear();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cells[y * self.width + x] == b'v' {
                    let to = (y + 1) % self.height * self.width + x;
                    if self.cells[to] == b'.' {
                        moves.push((y * self.width + x, to));
                    }
                }
            }
        }
        moved += moves.len();
        for &(from, to) in &moves {
            self.cells[from] = b'.';
            self.cells[to] = b'v';
        }
        moved
    }
}

impl fmt::Display for Seafloor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(std::str::from_utf8(row).unwrap())?;
        }
        Ok(())
    }
}

fn day25_traced(part: u8, s: &str, out: &mut impl Write) -> String {
    assert_eq!(part, 1, "day 25 has a single part");
    let mut floor = Seafloor::parse(s);
    writeln!(out, "{}", floor).unwrap();
    let mut steps = 0u64;
    loop {
        steps += 1;
        let moved = floor.step();
        writeln!(out, "{}", floor).unwrap();
        if moved == 0 {
            return steps.to_string();
        }
    }
}

fn day25(part: u8, s: &str) -> String {
    day25_traced(part, s, &mut io::sink())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let (day_arg, part_arg, path_arg, debug) = match &args[..] {
        [_, day, part] => (day, part, None, false),
        [_, day, part, flag] if flag.as_str() == "--debug" => (day, part, None, true),
        [_, day, part, path] => (day, part, Some(path), false),
        [_, day, part, path, flag] if flag.as_str() == "--debug" => (day, part, Some(path), true),
        _ => {
            eprintln!("usage: aoc2021 <day> <1|2> [input-file] [--debug]");
            std::process::exit(1)
        }
    };
    let day: usize = day_arg.parse()?;
    let part: u8 = part_arg.parse()?;
    assert!(part == 1 || part == 2, "part must be 1 or 2");
    let path = match path_arg {
        Some(path) => path.clone(),
        None => format!("inputs/day{}.txt", day),
    };
    let input = file::lines(&path)?.join("\n");

    let answer = if day == 25 && debug {
        day25_traced(part, &input, &mut io::stdout().lock())
    } else {
        let solve: fn(u8, &str) -> String = match day {
            1 => day1,
            2 => day2,
            3 => day3,
            4 => day4,
            5 => day5,
            6 => day6,
            7 => day7,
            8 => day8,
            12 => day12,
            25 => day25,
            _ => {
                eprintln!("no solution for day {}", day);
                std::process::exit(1)
            }
        };
        solve(part, &input)
    };
    println!("{}", answer);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day1_sample() {
        let input = include_str!("../inputs/day1.txt");
        assert_eq!(day1(1, input), "7");
        assert_eq!(day1(2, input), "5");
    }

    #[test]
    fn day2_sample() {
        let input = include_str!("../inputs/day2.txt");
        assert_eq!(day2(1, input), "150");
        assert_eq!(day2(2, input), "900");
    }

    #[test]
    fn day3_sample() {
        let input = include_str!("../inputs/day3.txt");
        assert_eq!(day3(1, input), "198");
        assert_eq!(day3(2, input), "230");
    }

    #[test]
    fn day4_sample() {
        let input = include_str!("../inputs/day4.txt");
        assert_eq!(day4(1, input), "4512");
        assert_eq!(day4(2, input), "1924");
    }

    #[test]
    fn day5_sample() {
        let input = include_str!("../inputs/day5.txt");
        assert_eq!(day5(1, input), "5");
        assert_eq!(day5(2, input), "12");
    }

    #[test]
    fn day6_sample() {
        let input = include_str!("../inputs/day6.txt");
        assert_eq!(day6(1, input), "5934");
        assert_eq!(day6(2, input), "26984457539");
    }

    #[test]
    fn day7_sample() {
        let input = include_str!("../inputs/day7.txt");
        assert_eq!(day7(1, input), "37");
        assert_eq!(day7(2, input), "168");
    }

    #[test]
    fn day8_sample() {
        let input = include_str!("../inputs/day8.txt");
        assert_eq!(day8(1, input), "26");
    }

    #[test]
    fn day12_sample() {
        let input = include_str!("../inputs/day12.txt");
        assert_eq!(day12(1, input), "10");
        assert_eq!(day12(2, input), "36");
    }

    #[test]
    fn day12_larger_caves() {
        let medium = "dc-end\nHN-start\nstart-kj\ndc-start\ndc-HN\nLN-dc\nHN-end\nkj-sa\nkj-HN\nkj-dc";
        assert_eq!(day12(1, medium), "19");
        assert_eq!(day12(2, medium), "103");

        let large = "fs-end\nhe-DX\nfs-he\nstart-DX\npj-DX\nend-zg\nzg-sl\nzg-pj\npj-he\nRW-he\n\
                     fs-DX\npj-RW\nzg-RW\nstart-pj\nhe-WI\nzg-he\npj-fs\nstart-RW";
        assert_eq!(day12(1, large), "226");
        assert_eq!(day12(2, large), "3509");
    }

    #[test]
    fn day25_sample() {
        let input = include_str!("../inputs/day25.txt");
        assert_eq!(day25(1, input), "58");
    }

    #[test]
    fn day25_debug_trace_dumps_every_step() {
        let input = include_str!("../inputs/day25.txt");
        let mut trace = Vec::new();
        assert_eq!(day25_traced(1, input, &mut trace), "58");
        let trace = String::from_utf8(trace).unwrap();
        assert!(trace.starts_with("v...>>.vv>\n"));
        // initial grid plus one dump per step, nine rows each
        assert_eq!(trace.lines().count(), 9 * 59);
    }
}
