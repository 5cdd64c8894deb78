/*!
# `POP`, `POPLN`

## Purpose
Remove the front value and print it.

## Remarks
`POPLN` adds a newline. An empty queue is a `NOT ENOUGH ARGUMENTS` error.
*/
