use crate::cli::context::{CLIContext, Target};
use crate::ops::member_ops;
use crate::validation;

pub fn list(ctx: &CLIContext) {
    if ctx.members.is_empty() {
        println!("No members yet. Use 'add <name>, <name>' to add some.");
        return;
    }
    println!("Members ({}, {} starred):", ctx.members.len(), ctx.members.star_count());
    for (i, m) in ctx.members.members().iter().enumerate() {
        println!("  {}. {}{}", i + 1, m.name, if m.is_star { " *" } else { "" });
    }
    println!("Team size: {}", ctx.group_size);
}

pub fn add(ctx: &mut CLIContext, args: &str) {
    let input = if !args.is_empty() {
        args.to_string()
    } else {
        match ctx.read_line("Names (comma separated): ") {
            Some(s) => s,
            None => return,
        }
    };

    let added = member_ops::add_members(&mut ctx.members, &input);
    match added.len() {
        0 => println!("No names given."),
        1 => println!("Added {}", added[0].name),
        n => println!("Added {} members", n),
    }
}

pub fn remove(ctx: &mut CLIContext, args: &str) {
    match CLIContext::parse_target(args) {
        Err(e) => {
            ctx.print_error(&e);
            println!("Usage: remove <name | #n>");
        }
        Ok(Target::Position(pos)) => {
            let Some(id) = ctx.members.at_position(pos).map(|m| m.id) else {
                println!("No member at position {}", pos);
                return;
            };
            match member_ops::remove_by_id(&mut ctx.members, id) {
                Ok(m) => println!("Removed {}", m.name),
                Err(e) => ctx.print_error(&e),
            }
        }
        Ok(Target::Name(name)) => match member_ops::remove_by_name(&mut ctx.members, name) {
            0 => println!("No member named '{}'", name),
            1 => println!("Removed {}", name),
            n => println!("Removed {} members named {}", n, name),
        },
    }
}

pub fn star(ctx: &mut CLIContext, args: &str) {
    match CLIContext::parse_target(args) {
        Err(e) => {
            ctx.print_error(&e);
            println!("Usage: star <name | #n>");
        }
        Ok(Target::Position(pos)) => {
            let Some(id) = ctx.members.at_position(pos).map(|m| m.id) else {
                println!("No member at position {}", pos);
                return;
            };
            match member_ops::toggle_star_by_id(&mut ctx.members, id) {
                Ok(m) => println!("{} is {}", m.name, if m.is_star { "starred" } else { "no longer starred" }),
                Err(e) => ctx.print_error(&e),
            }
        }
        Ok(Target::Name(name)) => match member_ops::toggle_star_by_name(&mut ctx.members, name) {
            0 => println!("No member named '{}'", name),
            n => println!("Toggled star on {} member(s) named {}", n, name),
        },
    }
}

pub fn size(ctx: &mut CLIContext, args: &str) {
    if args.is_empty() {
        println!("Team size: {}", ctx.group_size);
        return;
    }
    match validation::group_size(args) {
        Ok(n) => {
            ctx.group_size = n;
            println!("Team size set to {}", n);
        }
        Err(e) => ctx.print_error(&e),
    }
}
