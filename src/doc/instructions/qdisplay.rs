/*!
# `QDISPLAY`

## Purpose
Print the whole queue, front to back, separated by `, `.

## Remarks
The queue is not changed. An empty queue prints an empty line.
*/
