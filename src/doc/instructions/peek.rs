/*!
# `PEEK`, `PEEKLN`

## Purpose
Print the front value without removing it.

## Remarks
`PEEKLN` adds a newline. An empty queue is a `NOT ENOUGH ARGUMENTS` error.
*/
