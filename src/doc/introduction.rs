/*!
# Introductory Tutorial for qu

A qu program is a text file whose name ends in `.qu`. Each line holds one
instruction. There are no variables. Every value your program works with
lives in a single queue: values join at the back and leave from the front.

Write the following into `hello.qu`.

```text
PRINT "Hello World"
```

Then run it.

<pre><code>&nbsp;$ qu hello.qu
&nbsp;Hello World
</code></pre>

Stop a running program with CTRL-C.

## Working the queue

`PUSH` adds a value to the back of the queue. Arithmetic takes the two
values at the front, in order, and pushes the result to the back.
`POPLN` removes the front value and prints it on its own line.

```text
PUSH 3
PUSH 4
ADD
POPLN
```

prints `7` and leaves the queue empty. Since values always leave from the
front, `PUSH 10`, `PUSH 3`, `SUB` computes 10 minus 3, never 3 minus 10.

Strings work too. `ADD` joins two strings, and joins a string with an
integer written out in decimal.

```text
PUSH "a"
PUSH "b"
ADD
POPLN
```

prints `ab`.

## Labels and loops

A line of the form `|NAME|` is a label. It does nothing when reached, but
`GOTO` and the `IF` instructions can jump to it by name. They can also jump
to a zero-based line number. This program counts to three.

```text
PUSH 0
|LOOP|
PUSH 1
ADD
PEEKLN
PUSH 3
IFEQ END
SUB
PUSH 3
ADD
GOTO LOOP
|END|
```

## Ending a program

A program ends when it runs past its last line, with exit status 0.
`RET` ends it early: it removes the front value, which must be an integer,
and uses it as the exit status.

Any error stops the program with a message naming the line, counted from 0,
and exit status 255.

<pre><code>&nbsp;$ qu divide.qu
&nbsp;Error: DIVISION BY ZERO IN LINE 2
</code></pre>

Run `qu --help` for the command line options. Setting `QU_LOG=debug` in the
environment traces every instruction as it runs.
*/
