use arrayvec::ArrayVec;
use itertools::Itertools;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};

fn day1(part: u8, s: &str) -> String {
    let totals = s
        .trim()
        .split("\n\n")
        .map(|inventory| inventory.lines().map(|n| n.parse::<u64>().expect(n)).sum::<u64>());
    if part == 1 {
        totals.max().expect("no inventories").to_string()
    } else {
        totals.sorted_unstable().rev().take(3).sum::<u64>().to_string()
    }
}

fn day2(part: u8, s: &str) -> String {
    s.trim()
        .lines()
        .map(|line| {
            let (theirs, ours) = line.split_once(' ').expect(line);
            let theirs: i64 = match theirs {
                "A" => 1,
                "B" => 2,
                "C" => 3,
                _ => panic!("unknown shape {}", theirs),
            };
            if part == 1 {
                let ours: i64 = match ours {
                    "X" => 1,
                    "Y" => 2,
                    "Z" => 3,
                    _ => panic!("unknown shape {}", ours),
                };
                let outcome = if ours == theirs {
                    3
                } else if ours == theirs % 3 + 1 {
                    6
                } else {
                    0
                };
                ours + outcome
            } else {
                let outcome: i64 = match ours {
                    "X" => 0,
                    "Y" => 3,
                    "Z" => 6,
                    _ => panic!("unknown outcome {}", ours),
                };
                let ours = match outcome {
                    0 => (theirs + 1) % 3 + 1,
                    3 => theirs,
                    _ => theirs % 3 + 1,
                };
                ours + outcome
            }
        })
        .sum::<i64>()
        .to_string()
}

fn priority(item: u8) -> u64 {
    match item {
        b'a'..=b'z' => (item - b'a') as u64 + 1,
        b'A'..=b'Z' => (item - b'A') as u64 + 27,
        _ => panic!("unexpected item {}", item as char),
    }
}

fn day3(part: u8, s: &str) -> String {
    if part == 1 {
        s.trim()
            .lines()
            .map(|line| {
                let (front, back) = line.split_at(line.len() / 2);
                let front: FxHashSet<u8> = front.bytes().collect();
                let shared = back.bytes().find(|item| front.contains(item)).expect(line);
                priority(shared)
            })
            .sum::<u64>()
            .to_string()
    } else {
        s.trim()
            .lines()
            .tuples()
            .map(|(a, b, c)| {
                let a: FxHashSet<u8> = a.bytes().collect();
                let b: FxHashSet<u8> = b.bytes().collect();
                let badge = c.bytes().find(|item| a.contains(item) && b.contains(item)).expect(c);
                priority(badge)
            })
            .sum::<u64>()
            .to_string()
    }
}

fn day4(part: u8, s: &str) -> String {
    s.trim()
        .lines()
        .filter(|line| {
            let (first, second) = line.split_once(',').expect(line);
            let range = |r: &str| -> (i64, i64) {
                let (lo, hi) = r.split_once('-').expect(r);
                (lo.parse().expect(lo), hi.parse().expect(hi))
            };
            let (a, b) = (range(first), range(second));
            if part == 1 {
                (a.0 <= b.0 && a.1 >= b.1) || (b.0 <= a.0 && b.1 >= a.1)
            } else {
                a.0 <= b.1 && a.1 >= b.0
            }
        })
        .count()
        .to_string()
}

fn day5(part: u8, s: &str) -> String {
    let (drawing, procedure) = s.split_once("\n\n").expect("missing procedure section");
    let mut rows = drawing.lines().rev();
    let labels = rows.next().expect("missing stack labels");
    let mut stacks: Vec<Vec<u8>> = vec![Vec::new(); labels.split_whitespace().count()];
    for row in rows {
        for (i, stack) in stacks.iter_mut().enumerate() {
            // stack i's crates sit in column 4i + 1 of the drawing
            match row.as_bytes().get(4 * i + 1) {
                Some(&c) if c.is_ascii_uppercase() => stack.push(c),
                _ => (),
            }
        }
    }

    let step = Regex::new(r"move (\d+) from (\d+) to (\d+)").unwrap();
    for caps in step.captures_iter(procedure) {
        let n = |i: usize| caps[i].parse::<usize>().unwrap();
        let (count, from, to) = (n(1), n(2) - 1, n(3) - 1);
        if part == 1 {
            for _ in 0..count {
                let top = stacks[from].pop().expect("move from an empty stack");
                stacks[to].push(top);
            }
        } else {
            let at = stacks[from].len() - count;
            let lifted = stacks[from].split_off(at);
            stacks[to].extend(lifted);
        }
    }
    stacks.iter().map(|stack| *stack.last().expect("empty stack") as char).collect()
}

fn day6(part: u8, s: &str) -> String {
    let marker = if part == 1 { 4 } else { 14 };
    s.trim()
        .lines()
        .map(|line| {
            let window = line
                .as_bytes()
                .windows(marker)
                .position(|w| w.iter().all_unique())
                .expect(line);
            (window + marker).to_string()
        })
        .join(",")
}

fn day7(part: u8, s: &str) -> String {
    let mut sizes: FxHashMap<String, u64> = FxHashMap::default();
    let mut path: Vec<&str> = Vec::new();
    for line in s.trim().lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            ["$", "cd", "/"] => path.clear(),
            ["$", "cd", ".."] => {
                path.pop();
            }
            ["$", "cd", dir] => path.push(*dir),
            ["$", "ls"] | ["dir", _] => (),
            [size, _name] => {
                let size: u64 = size.parse().expect(line);
                // a file counts toward every directory on its path, root included
                for depth in 0..=path.len() {
                    *sizes.entry(path[..depth].join("/")).or_insert(0) += size;
                }
            }
            _ => panic!("unexpected terminal line {}", line),
        }
    }

    if part == 1 {
        sizes.values().filter(|&&size| size <= 100_000).sum::<u64>().to_string()
    } else {
        let used = sizes[""];
        let shortfall = 30_000_000 - (70_000_000 - used);
        sizes
            .values()
            .filter(|&&size| size >= shortfall)
            .min()
            .expect("no directory is large enough")
            .to_string()
    }
}

fn day8(part: u8, s: &str) -> String {
    let grid: Vec<&[u8]> = s.trim().lines().map(|line| line.as_bytes()).collect();
    let (h, w) = (grid.len(), grid[0].len());
    if part == 1 {
        // edge trees are always visible
        let mut visible = 2 * h + 2 * w - 4;
        for y in 1..h - 1 {
            for x in 1..w - 1 {
                let tree = grid[y][x];
                if (0..x).all(|xx| grid[y][xx] < tree)
                    || (x + 1..w).all(|xx| grid[y][xx] < tree)
                    || (0..y).all(|yy| grid[yy][x] < tree)
                    || (y + 1..h).all(|yy| grid[yy][x] < tree)
                {
                    visible += 1;
                }
            }
        }
        visible.to_string()
    } else {
        let mut best = 0usize;
        for y in 0..h {
            for x in 0..w {
                let tree = grid[y][x];
                let mut score = 1;
                for (dx, dy) in [(-1i64, 0i64), (1, 0), (0, -1), (0, 1)] {
                    let mut seen = 0;
                    let (mut xx, mut yy) = (x as i64 + dx, y as i64 + dy);
                    while (0..w as i64).contains(&xx) && (0..h as i64).contains(&yy) {
                        seen += 1;
                        if grid[yy as usize][xx as usize] >= tree {
                            break;
                        }
                        xx += dx;
                        yy += dy;
                    }
                    score *= seen;
                }
                best = best.max(score);
            }
        }
        best.to_string()
    }
}

fn day9(part: u8, s: &str) -> String {
    let knot_count = if part == 1 { 2 } else { 10 };
    let mut knots: ArrayVec<(i64, i64), 10> = (0..knot_count).map(|_| (0, 0)).collect();
    let mut visited: FxHashSet<(i64, i64)> = FxHashSet::default();
    visited.insert((0, 0));
    for line in s.trim().lines() {
        let (direction, steps) = line.split_once(' ').expect(line);
        let (dx, dy) = match direction {
            "U" => (0, 1),
            "D" => (0, -1),
            "L" => (-1, 0),
            "R" => (1, 0),
            _ => panic!("unknown direction {}", direction),
        };
        let steps: u32 = steps.parse().expect(line);
        for _ in 0..steps {
            knots[0].0 += dx;
            knots[0].1 += dy;
            for i in 1..knots.len() {
                let (hx, hy) = knots[i - 1];
                let (tx, ty) = knots[i];
                if (hx - tx).abs() > 1 || (hy - ty).abs() > 1 {
                    knots[i] = (tx + (hx - tx).signum(), ty + (hy - ty).signum());
                }
            }
            visited.insert(*knots.last().unwrap());
        }
    }
    visited.len().to_string()
}

fn day10(part: u8, s: &str) -> String {
    let mut x: i64 = 1;
    let mut cycle: i64 = 0;
    let mut strength: i64 = 0;
    let mut screen = String::with_capacity(41 * 6);
    for line in s.trim().lines() {
        let (cycles, delta) = match line.split_once(' ') {
            None => {
                assert_eq!(line, "noop", "unknown instruction {}", line);
                (1, 0)
            }
            Some(("addx", n)) => (2, n.parse::<i64>().expect(line)),
            Some(_) => panic!("unknown instruction {}", line),
        };
        for _ in 0..cycles {
            cycle += 1;
            if (cycle - 20) % 40 == 0 {
                strength += cycle * x;
            }
            let pixel = (cycle - 1) % 40;
            screen.push(if (pixel - x).abs() <= 1 { '#' } else { '.' });
            if pixel == 39 {
                screen.push('\n');
            }
        }
        x += delta;
    }
    if part == 1 { strength.to_string() } else { screen.trim_end().to_string() }
}

enum Operation {
    Add(u64),
    Mul(u64),
    Square,
}

struct Monkey {
    items: Vec<u64>,
    operation: Operation,
    divisor: u64,
    if_true: usize,
    if_false: usize,
    inspections: u64,
}

fn parse_monkeys(s: &str) -> Vec<Monkey> {
    s.trim()
        .split("\n\n")
        .map(|section| {
            let mut lines = section.lines();
            let header = lines.next().expect("empty monkey section");
            assert!(header.starts_with("Monkey "), "{}", header);
            let mut field = |prefix: &str| -> String {
                let line = lines.next().expect(prefix);
                line.trim().strip_prefix(prefix).expect(line).to_string()
            };

            let items_line = field("Starting items: ");
            let items = items_line.split(", ").map(|n| n.parse().expect(n)).collect();
            let op_line = field("Operation: new = old ");
            let operation = match op_line.split_once(' ').expect(&op_line) {
                ("*", "old") => Operation::Square,
                ("*", n) => Operation::Mul(n.parse().expect(n)),
                ("+", n) => Operation::Add(n.parse().expect(n)),
                _ => panic!("unsupported operation {}", op_line),
            };
            let divisor_line = field("Test: divisible by ");
            let if_true_line = field("If true: throw to monkey ");
            let if_false_line = field("If false: throw to monkey ");
            Monkey {
                items,
                operation,
                divisor: divisor_line.parse().expect(&divisor_line),
                if_true: if_true_line.parse().expect(&if_true_line),
                if_false: if_false_line.parse().expect(&if_false_line),
                inspections: 0,
            }
        })
        .collect()
}

fn monkey_business(mut monkeys: Vec<Monkey>, rounds: usize, relief: bool) -> u64 {
    // worry stays exact under every divisibility test modulo the divisor product
    let modulus: u64 = monkeys.iter().map(|m| m.divisor).product();
    for _ in 0..rounds {
        for i in 0..monkeys.len() {
            let items = std::mem::take(&mut monkeys[i].items);
            monkeys[i].inspections += items.len() as u64;
            for item in items {
                let worry = match monkeys[i].operation {
                    Operation::Add(n) => item + n,
                    Operation::Mul(n) => item * n,
                    Operation::Square => item * item,
                };
                let worry = if relief { worry / 3 } else { worry % modulus };
                let target = if worry % monkeys[i].divisor == 0 {
                    monkeys[i].if_true
                } else {
                    monkeys[i].if_false
                };
                monkeys[target].items.push(worry);
            }
        }
    }
    monkeys.iter().map(|m| m.inspections).sorted_unstable().rev().take(2).product()
}

fn day11(part: u8, s: &str) -> String {
    let monkeys = parse_monkeys(s);
    if part == 1 {
        monkey_business(monkeys, 20, true).to_string()
    } else {
        monkey_business(monkeys, 10_000, false).to_string()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let days = [day1, day2, day3, day4, day5, day6, day7, day8, day9, day10, day11];

    let args: Vec<String> = std::env::args().collect();
    let (day_arg, part_arg, path_arg) = match &args[..] {
        [_, day, part] => (day, part, None),
        [_, day, part, path] => (day, part, Some(path)),
        _ => {
            eprintln!("usage: aoc2022 <day> <1|2> [input-file]");
            std::process::exit(1)
        }
    };
    let day: usize = day_arg.parse()?;
    let part: u8 = part_arg.parse()?;
    assert!(part == 1 || part == 2, "part must be 1 or 2");
    if day == 0 || day > days.len() {
        eprintln!("no solution for day {}", day);
        std::process::exit(1);
    }
    let path = match path_arg {
        Some(path) => path.clone(),
        None => format!("inputs/day{}.txt", day),
    };
    let input = file::lines(&path)?.join("\n");
    println!("{}", days[day - 1](part, &input));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day1_sample() {
        let input = include_str!("../inputs/day1.txt");
        assert_eq!(day1(1, input), "24000");
        assert_eq!(day1(2, input), "45000");
    }

    #[test]
    fn day2_sample() {
        let input = include_str!("../inputs/day2.txt");
        assert_eq!(day2(1, input), "15");
        assert_eq!(day2(2, input), "12");
    }

    #[test]
    fn day3_sample() {
        let input = include_str!("../inputs/day3.txt");
        assert_eq!(day3(1, input), "157");
        assert_eq!(day3(2, input), "70");
    }

    #[test]
    fn day4_sample() {
        let input = include_str!("../inputs/day4.txt");
        assert_eq!(day4(1, input), "2");
        assert_eq!(day4(2, input), "4");
    }

    #[test]
    fn day5_sample() {
        let input = include_str!("../inputs/day5.txt");
        assert_eq!(day5(1, input), "CMZ");
        assert_eq!(day5(2, input), "MCD");
    }

    #[test]
    fn day6_sample_streams() {
        let input = include_str!("../inputs/day6.txt");
        assert_eq!(day6(1, input), "7,5,6,10,11");
        assert_eq!(day6(2, input), "19,23,23,29,26");
    }

    #[test]
    fn day7_sample() {
        let input = include_str!("../inputs/day7.txt");
        assert_eq!(day7(1, input), "95437");
        assert_eq!(day7(2, input), "24933642");
    }

    #[test]
    fn day8_sample() {
        let input = include_str!("../inputs/day8.txt");
        assert_eq!(day8(1, input), "21");
        assert_eq!(day8(2, input), "8");
    }

    #[test]
    fn day9_sample() {
        let input = include_str!("../inputs/day9.txt");
        assert_eq!(day9(1, input), "13");
        assert_eq!(day9(2, input), "1");
    }

    #[test]
    fn day9_larger_sample() {
        let input = "R 5\nU 8\nL 8\nD 3\nR 17\nD 10\nL 25\nU 20";
        assert_eq!(day9(2, input), "36");
    }

    #[test]
    fn day10_sample() {
        let input = include_str!("../inputs/day10.txt");
        assert_eq!(day10(1, input), "13140");
        let image = "\
##..##..##..##..##..##..##..##..##..##..
###...###...###...###...###...###...###.
####....####....####....####....####....
#####.....#####.....#####.....#####.....
######......######......######......####
#######.......#######.......#######.....";
        assert_eq!(day10(2, input), image);
    }

    #[test]
    fn day11_sample() {
        let input = include_str!("../inputs/day11.txt");
        assert_eq!(day11(1, input), "10605");
        assert_eq!(day11(2, input), "2713310158");
    }
}
