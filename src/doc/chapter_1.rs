/*!
# Values, Lines and Jumps

## Values

There are two types of value. Integers are signed 64-bit. Arithmetic that
overflows wraps around rather than failing. Strings are written in double
quotes. The two characters `\n` inside a string literal become a newline.

```text
PUSH -42
PUSH "two\nlines"
```

A `PUSH` argument that is neither an integer nor a complete string is an
`INVALID PUSH` error.

## Lines

Instructions are recognized by their exact keyword. Anything between the
keyword and the end of the line is the argument. Blank lines are skipped.

Lines are numbered from 0 in error messages, in `--list` output and as jump
targets.

## Labels

A label is a name between two `|` characters. The label refers to its own
line. A line with exactly one `|` is a `SINGLE DELIMITER` error, reported
before any instruction runs. Lines starting with `|` never execute.

When two lines declare the same label, the later one is used.

## Jump targets

`GOTO` and the `IF` family take a target. An integer target is a line
number and must be inside the program, otherwise it is an
`INVALID JUMP TARGET` error. Any other target is a label name. A name no
line declares is an `UNRESOLVED JUMP TARGET` error.

The `IF` instructions compare the first two values in the queue without
removing them. Both must be integers.
*/
